//! The key-value token: marks as JSON pairs under `a`/`b`/`c`, dragon
//! indices as a comma list under `d`. Unknown keys pass through unread.

use super::{Configuration, last_value};
use crate::arena::ArenaSpec;
use crate::geometry::Point;
use crate::marks::{MARK_COUNT, MarkSet};
use crate::selection::SlotSet;
use std::iter::zip;

const MARK_KEYS: [&str; MARK_COUNT] = ["a", "b", "c"];

pub(super) fn encode(config: &Configuration) -> String {
    let mut parts: Vec<String> = zip(MARK_KEYS, config.marks)
        .map(|(key, mark)| format!("{key}=[{},{}]", mark.x, mark.y))
        .collect();

    let indices: Vec<String> = config.dragons.iter().map(|i| i.to_string()).collect();
    parts.push(format!("d={}", indices.join(",")));

    parts.join("&")
}

pub(super) fn decode(pairs: &[(&str, &str)], spec: &ArenaSpec) -> Configuration {
    let mut config = Configuration::initial(spec);

    // a mark named with an unreadable value moves to its fallback spot; a
    // mark not named at all stays on the home row
    for (index, key) in MARK_KEYS.iter().enumerate() {
        if let Some(raw) = last_value(pairs, key) {
            config.marks[index] = parse_mark(raw).unwrap_or_else(|| {
                log::debug!("mark value {raw:?} unreadable, using fallback row");
                MarkSet::fallback_position(spec, index)
            });
        }
    }

    if let Some(raw) = last_value(pairs, "d") {
        config.dragons = parse_indices(raw, spec.slot_count());
    }

    config
}

fn parse_mark(raw: &str) -> Option<Point> {
    serde_json::from_str::<[f64; 2]>(raw.trim())
        .ok()
        .map(|[x, y]| Point::new(x, y))
}

fn parse_indices(raw: &str, slot_count: usize) -> SlotSet {
    let mut set = SlotSet::empty();
    for entry in raw.split(',') {
        match entry.trim().parse::<usize>() {
            Ok(index) if index < slot_count => set.insert(index),
            Ok(index) => log::debug!("dropping out-of-range dragon index {index}"),
            Err(_) => log::debug!("dropping unreadable dragon index {entry:?}"),
        }
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode as decode_token;
    use crate::arena::ArenaVariant;

    fn eight() -> ArenaSpec {
        ArenaSpec::new(ArenaVariant::Eight)
    }

    #[test]
    fn marks_and_dragons_parse_together() {
        let spec = eight();
        let config = decode_token("a=[250,310]&b=[300, 300]&c=[412.5,288]&d=0,3,5", &spec);

        assert_eq!(config.marks[0], Point::new(250.0, 310.0));
        assert_eq!(config.marks[1], Point::new(300.0, 300.0));
        assert_eq!(config.marks[2], Point::new(412.5, 288.0));
        assert_eq!(config.dragons.iter().collect::<Vec<_>>(), vec![0, 3, 5]);
    }

    #[test]
    fn bad_json_moves_the_mark_to_its_fallback_spot() {
        let spec = eight();
        let config = decode_token("?a=[300, 300]&b=[bad json&d=0,1,99,x", &spec);

        assert_eq!(config.marks[0], Point::new(300.0, 300.0));
        assert_eq!(config.marks[1], Point::new(320.0, 300.0));
        assert_eq!(config.dragons.iter().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn unnamed_marks_stay_on_the_home_row() {
        let spec = eight();
        let config = decode_token("b=[200,260]", &spec);

        assert_eq!(config.marks[0], Point::new(270.0, 300.0));
        assert_eq!(config.marks[1], Point::new(200.0, 260.0));
        assert_eq!(config.marks[2], Point::new(330.0, 300.0));
        assert!(config.dragons.is_empty());
    }

    #[test]
    fn index_entries_are_screened_one_by_one() {
        let spec = eight();
        let cases = vec![
            ("d=0,1,2", vec![0, 1, 2]),
            ("d=7,0", vec![0, 7]),
            ("d=8,9,1", vec![1]),
            ("d=1, 3 ,nope,-2", vec![1, 3]),
            ("d=", vec![]),
        ];

        for (text, expected) in cases {
            let config = decode_token(text, &spec);
            assert_eq!(config.dragons.iter().collect::<Vec<_>>(), expected, "{text}");
        }
    }

    #[test]
    fn wrong_shape_json_counts_as_unreadable() {
        let spec = eight();
        let cases = vec!["a=300", "a=[300]", "a=[1,2,3]", "a={}", "a=[\"x\",\"y\"]"];

        for text in cases {
            let config = decode_token(text, &spec);
            assert_eq!(config.marks[0], Point::new(300.0, 300.0), "{text}");
        }
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let spec = eight();
        let config = decode_token("z=99&a=[260,330]&color=red", &spec);
        assert_eq!(config.marks[0], Point::new(260.0, 330.0));
    }

    #[test]
    fn empty_selection_still_encodes_a_d_key() {
        let spec = eight();
        let config = Configuration::initial(&spec);
        let encoded = encode(&config);
        assert_eq!(encoded, "a=[270,300]&b=[300,300]&c=[330,300]&d=");

        let decoded = decode_token(&encoded, &spec);
        assert_eq!(decoded, config);
    }
}
