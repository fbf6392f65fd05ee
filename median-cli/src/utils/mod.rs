use anyhow::Context;

/// Parse a comma-separated list of integers. An empty string is an empty list.
pub fn parse_list(s: &str) -> anyhow::Result<Vec<i64>> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(Vec::new());
    }
    s.split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<i64>()
                .with_context(|| format!("Invalid integer `{}`", token))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(parse_list("").unwrap(), Vec::<i64>::new());
        assert_eq!(parse_list("  ").unwrap(), Vec::<i64>::new());
        assert_eq!(parse_list("1,3").unwrap(), vec![1, 3]);
        assert_eq!(parse_list(" -4 , 2,0 ").unwrap(), vec![-4, 2, 0]);
    }

    #[test]
    fn reject_bad_tokens() {
        let err = parse_list("1,x").unwrap_err();
        assert_eq!(err.to_string(), "Invalid integer `x`");
        assert!(parse_list("1,,2").is_err());
        assert!(parse_list("1.5").is_err());
    }
}
