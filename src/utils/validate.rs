/// Region names look like `us-east-1` or `ap-southeast-3`: lowercase ASCII
/// words joined by dashes, ending in a number.
pub fn is_valid_region(region: &str) -> bool {
    let parts: Vec<&str> = region.split('-').collect();
    if parts.len() < 3 {
        return false;
    }
    let Some((last, words)) = parts.split_last() else {
        return false;
    };
    !last.is_empty()
        && last.chars().all(|c| c.is_ascii_digit())
        && words
            .iter()
            .all(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()))
}

/// `i-` followed by 8 or 17 lowercase hex digits.
pub fn is_valid_instance_id(id: &str) -> bool {
    match id.strip_prefix("i-") {
        Some(hex) => {
            (hex.len() == 8 || hex.len() == 17)
                && hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_real_regions() {
        for r in ["us-east-1", "eu-central-2", "ap-southeast-3", "us-gov-west-1", "il-central-1"] {
            assert!(is_valid_region(r), "{r}");
        }
    }

    #[test]
    fn rejects_bad_regions() {
        for r in ["", "us-east", "US-EAST-1", "us--1", "us-east-1a", "../etc"] {
            assert!(!is_valid_region(r), "{r}");
        }
    }

    #[test]
    fn instance_ids() {
        assert!(is_valid_instance_id("i-0123456789abcdef0"));
        assert!(is_valid_instance_id("i-1a2b3c4d"));
        assert!(!is_valid_instance_id("i-0123456789ABCDEF0"));
        assert!(!is_valid_instance_id("i-123"));
        assert!(!is_valid_instance_id("0123456789abcdef0"));
        assert!(!is_valid_instance_id("i-0123456789abcdefg"));
    }
}
