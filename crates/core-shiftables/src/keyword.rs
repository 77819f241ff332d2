//! Static keyword cycles: access modifiers and calendar words.
//!
//! Each cycle is a closed, ordered ring; a term moves to its neighbour and
//! wraps at both ends. Lookups are exact (the executor retries lower-cased
//! candidates and mirrors the original casing afterwards).

use core_model::ShiftContext;
use core_text::modulo_shift_integer;

#[derive(Debug, Clone, Copy)]
pub struct KeywordCycle {
    pub name: &'static str,
    pub terms: &'static [&'static str],
}

impl KeywordCycle {
    pub fn position(&self, term: &str) -> Option<usize> {
        self.terms.iter().position(|t| *t == term)
    }

    pub fn shift(&self, term: &str, is_up: bool) -> Option<String> {
        let idx = self.position(term)?;
        let next = modulo_shift_integer(idx, self.terms.len(), is_up);
        Some(self.terms[next].to_string())
    }
}

pub const ACCESS_MODIFIERS: KeywordCycle = KeywordCycle {
    name: "access-modifiers",
    terms: &["public", "protected", "private"],
};

pub const MONTHS: KeywordCycle = KeywordCycle {
    name: "months",
    terms: &[
        "january", "february", "march", "april", "may", "june", "july", "august", "september",
        "october", "november", "december",
    ],
};

pub const MONTHS_ABBR: KeywordCycle = KeywordCycle {
    name: "months-abbr",
    terms: &["jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec"],
};

pub const WEEKDAYS: KeywordCycle = KeywordCycle {
    name: "weekdays",
    terms: &["monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday"],
};

pub const WEEKDAYS_ABBR: KeywordCycle = KeywordCycle {
    name: "weekdays-abbr",
    terms: &["mon", "tue", "wed", "thu", "fri", "sat", "sun"],
};

pub const TIME_UNITS: KeywordCycle = KeywordCycle {
    name: "time-units",
    terms: &["millisecond", "second", "minute", "hour", "day", "week", "month", "year"],
};

pub const TIME_UNITS_PLURAL: KeywordCycle = KeywordCycle {
    name: "time-units-plural",
    terms: &["milliseconds", "seconds", "minutes", "hours", "days", "weeks", "months", "years"],
};

/// Calendar rings in lookup order. `may` lives in both month rings; the full
/// month ring is listed first and wins.
pub static CALENDAR_CYCLES: [KeywordCycle; 6] =
    [MONTHS, MONTHS_ABBR, WEEKDAYS, WEEKDAYS_ABBR, TIME_UNITS, TIME_UNITS_PLURAL];

pub fn calendar_cycle(term: &str) -> Option<&'static KeywordCycle> {
    CALENDAR_CYCLES.iter().find(|c| c.position(term).is_some())
}

/// `public`/`protected`/`private`, unless it names a doc tag (`@private`).
pub fn is_access_modifier(ctx: &ShiftContext) -> bool {
    ctx.prefix_char != Some('@') && ACCESS_MODIFIERS.position(&ctx.candidate).is_some()
}

pub fn shift_access_modifier(ctx: &ShiftContext) -> Option<String> {
    ACCESS_MODIFIERS.shift(&ctx.candidate, ctx.is_up())
}

pub fn is_calendar_word(ctx: &ShiftContext) -> bool {
    calendar_cycle(&ctx.candidate).is_some()
}

pub fn shift_calendar_word(ctx: &ShiftContext) -> Option<String> {
    calendar_cycle(&ctx.candidate)?.shift(&ctx.candidate, ctx.is_up())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{down, up};
    use core_model::Direction;

    #[test]
    fn access_modifiers_cycle() {
        assert_eq!(shift_access_modifier(&up("public")).as_deref(), Some("protected"));
        assert_eq!(shift_access_modifier(&up("private")).as_deref(), Some("public"));
        assert_eq!(shift_access_modifier(&down("public")).as_deref(), Some("private"));
    }

    #[test]
    fn access_modifier_after_at_is_a_doc_tag() {
        let ctx = ShiftContext::new("private", Direction::Up).with_neighbours(Some('@'), None);
        assert!(!is_access_modifier(&ctx));
    }

    #[test]
    fn calendar_rings_wrap() {
        assert_eq!(shift_calendar_word(&up("december")).as_deref(), Some("january"));
        assert_eq!(shift_calendar_word(&down("mon")).as_deref(), Some("sun"));
        assert_eq!(shift_calendar_word(&up("hour")).as_deref(), Some("day"));
        assert_eq!(shift_calendar_word(&down("seconds")).as_deref(), Some("milliseconds"));
        assert_eq!(shift_calendar_word(&up("may")).as_deref(), Some("june"));
        assert!(!is_calendar_word(&up("Monday")));
    }

    #[test]
    fn cycle_period_returns_to_start() {
        for cycle in CALENDAR_CYCLES.iter().chain([&ACCESS_MODIFIERS]) {
            let mut term = cycle.terms[1].to_string();
            for _ in 0..cycle.terms.len() {
                term = cycle.shift(&term, true).unwrap();
            }
            assert_eq!(term, cycle.terms[1], "{}", cycle.name);
        }
    }
}
