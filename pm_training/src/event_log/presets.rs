use super::import_log::parse_simple_log;
use super::simple_log::SimpleEventLog;

/// Names of the preset sample logs, in catalog order.
pub const PRESET_KEYS: [&str; 8] = ["L1", "L2", "L3", "L4", "L5", "L6", "L7", "L8"];

/// Raw text of a preset sample log in the simple event log notation.
pub fn preset_log_text(key: &str) -> Option<&'static str> {
    match key {
        "L1" => Some("[<abce>50,<acbe>40,<abcdbce>30,<acbdbce>20,<abcdcbe>10,<acbdcbdbce>10]"),
        "L2" => Some("[<aceg>2,<aecg>3,<bdfg>2,<bfdg>4]"),
        "L3" => Some("[<acd>45,<bce>42]"),
        "L4" => Some("[<abab>5,<ac>2]"),
        "L5" => Some("[<abce>10,<acbe>5,<ade>1]"),
        "L6" => Some("[<ab>35,<ba>15]"),
        "L7" => Some("[<a>10,<ab>8,<acb>6,<accb>3,<acccb>1]"),
        "L8" => Some("[<abef>2,<abecdbf>3,<abcedbf>2,<abcdebf>4,<aebcdbf>3]"),
        _ => None,
    }
}

/// Parse a preset sample log into a [`SimpleEventLog`].
pub fn preset_log(key: &str) -> Option<SimpleEventLog> {
    preset_log_text(key).and_then(|text| parse_simple_log(text).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_presets_parse() {
        for key in PRESET_KEYS {
            let log = preset_log(key).unwrap();
            assert!(log.variant_count() > 0, "preset {} is empty", key);
        }
    }

    #[test]
    fn preset_contents() {
        let l1 = preset_log("L1").unwrap();
        assert_eq!(l1.variant_count(), 6);
        assert_eq!(l1.total_traces(), 160);

        let l3 = preset_log("L3").unwrap();
        assert_eq!(l3.total_traces(), 87);

        assert!(preset_log("L9").is_none());
        assert!(preset_log_text("").is_none());
    }
}
