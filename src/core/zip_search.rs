//! ZIP code availability search
//!
//! The search widget is modelled as a small state machine:
//!
//! ```text
//! Idle ──Submit(valid)──▶ Searching ──LookupFinished──▶ Results
//!   │                        │
//!   └──Submit(invalid)──▶ Error ◀──Submit(invalid)──┘
//! ```
//!
//! `Error` goes back to `Idle` on the next keystroke. Submitting again while a
//! lookup is in flight restarts it: every submission bumps the generation and
//! completions for an older generation are dropped.

use std::fmt;

/// Simulated network round trip for the sample lookup (milliseconds)
pub const LOOKUP_DELAY_MS: u32 = 2000;

/// Number of digits in a US ZIP code
pub const ZIP_LENGTH: usize = 5;

/// Validation error for the ZIP input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ZipError {
    #[error("Please enter a valid 5-digit ZIP code")]
    Invalid,
}

/// A validated five digit ZIP code
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Zip(String);

impl Zip {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Zip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Accept exactly five ASCII digits
pub fn validate_zip(input: &str) -> Result<Zip, ZipError> {
    if input.len() == ZIP_LENGTH && input.bytes().all(|b| b.is_ascii_digit()) {
        Ok(Zip(input.to_string()))
    } else {
        Err(ZipError::Invalid)
    }
}

/// Keep only digits and cut the input to five characters
pub fn sanitize_zip_input(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(ZIP_LENGTH)
        .collect()
}

/// One provider row returned by an availability lookup
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderAvailability {
    pub name: &'static str,
    pub color: &'static str,
    pub speeds: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
}

/// Source of availability results for a ZIP code
pub trait AvailabilityLookup {
    fn lookup(&self, zip: &Zip) -> Vec<ProviderAvailability>;
}

/// Returns the same typical providers for every ZIP code
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleAvailability;

impl AvailabilityLookup for SampleAvailability {
    fn lookup(&self, _zip: &Zip) -> Vec<ProviderAvailability> {
        vec![
            ProviderAvailability {
                name: "Verizon",
                color: "#ee0000",
                speeds: "Up to 940 Mbps",
                price: "$49.99–$89.99/mo",
                features: &["Fiber available", "No contract options", "Free router rental"],
            },
            ProviderAvailability {
                name: "Spectrum",
                color: "#0075c9",
                speeds: "Up to 500 Mbps",
                price: "$49.99–$109.99/mo",
                features: &["No contracts", "Free modem", "TV bundles available"],
            },
            ProviderAvailability {
                name: "AT&T",
                color: "#00a8e0",
                speeds: "Up to 1000 Mbps",
                price: "$55–$180/mo",
                features: &["Fiber & DSL options", "TV bundles", "Autopay discount"],
            },
            ProviderAvailability {
                name: "Optimum",
                color: "#ff6900",
                speeds: "Up to 940 Mbps",
                price: "$40–$180/mo",
                features: &["Fiber network", "No annual contract", "Mobile savings"],
            },
        ]
    }
}

/// Phase of the search widget
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Searching,
    Results,
    Error,
}

/// Inputs to the search state machine
#[derive(Debug, Clone, PartialEq)]
pub enum ZipEvent {
    /// The input field changed
    Input(String),
    /// The form was submitted
    Submit,
    /// A lookup started by an earlier `Submit` completed
    LookupFinished {
        generation: u64,
        results: Vec<ProviderAvailability>,
    },
}

/// Lookup the caller must perform after a valid submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub zip: Zip,
    pub generation: u64,
}

/// Full state of the ZIP search widget
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ZipSearch {
    /// Sanitised input, at most five digits
    pub zip: String,
    pub phase: SearchPhase,
    pub error: Option<String>,
    pub results: Vec<ProviderAvailability>,
    /// Incremented on every submission
    pub generation: u64,
}

impl ZipSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_searching(&self) -> bool {
        self.phase == SearchPhase::Searching
    }

    /// Pure transition function. Returns the next state and, for a valid
    /// submission, the lookup to start.
    pub fn step(&self, event: ZipEvent) -> (ZipSearch, Option<LookupRequest>) {
        let mut next = self.clone();

        match event {
            ZipEvent::Input(raw) => {
                next.zip = sanitize_zip_input(&raw);
                if next.phase == SearchPhase::Error {
                    next.phase = SearchPhase::Idle;
                    next.error = None;
                }
                (next, None)
            }
            ZipEvent::Submit => {
                // Any submission supersedes a lookup still in flight
                next.generation += 1;
                match validate_zip(&next.zip) {
                    Ok(zip) => {
                        next.phase = SearchPhase::Searching;
                        next.error = None;
                        let request = LookupRequest {
                            zip,
                            generation: next.generation,
                        };
                        (next, Some(request))
                    }
                    Err(err) => {
                        next.phase = SearchPhase::Error;
                        next.error = Some(err.to_string());
                        (next, None)
                    }
                }
            }
            ZipEvent::LookupFinished {
                generation,
                results,
            } => {
                if next.phase == SearchPhase::Searching && generation == next.generation {
                    next.phase = SearchPhase::Results;
                    next.results = results;
                }
                (next, None)
            }
        }
    }

    /// Apply an event in place, returning the lookup to start if any
    pub fn apply(&mut self, event: ZipEvent) -> Option<LookupRequest> {
        let (next, request) = self.step(event);
        *self = next;
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(zip: &str) -> ZipSearch {
        ZipSearch::new().step(ZipEvent::Input(zip.to_string())).0
    }

    fn sample_results(zip: &Zip) -> Vec<ProviderAvailability> {
        SampleAvailability.lookup(zip)
    }

    // ========================================================================
    // Validation
    // ========================================================================

    #[test]
    fn test_validate_zip_accepts_five_digits() {
        let zip = validate_zip("12345").unwrap();
        assert_eq!(zip.as_str(), "12345");
        assert_eq!(zip.to_string(), "12345");
    }

    #[test]
    fn test_validate_zip_rejects_everything_else() {
        for input in ["", "1234", "123456", "abcde", "1234a", " 12345", "１２３４５"] {
            assert_eq!(validate_zip(input), Err(ZipError::Invalid), "{:?}", input);
        }
    }

    #[test]
    fn test_zip_error_message() {
        assert_eq!(
            ZipError::Invalid.to_string(),
            "Please enter a valid 5-digit ZIP code"
        );
    }

    #[test]
    fn test_sanitize_zip_input() {
        assert_eq!(sanitize_zip_input("12-34 5"), "12345");
        assert_eq!(sanitize_zip_input("1234567"), "12345");
        assert_eq!(sanitize_zip_input("abcde"), "");
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    #[test]
    fn test_valid_zip_searches_then_shows_results() {
        let state = typed("12345");
        assert_eq!(state.phase, SearchPhase::Idle);

        let (searching, request) = state.step(ZipEvent::Submit);
        assert_eq!(searching.phase, SearchPhase::Searching);
        let request = request.unwrap();
        assert_eq!(request.zip.as_str(), "12345");
        assert_eq!(request.generation, searching.generation);

        let (done, none) = searching.step(ZipEvent::LookupFinished {
            generation: request.generation,
            results: sample_results(&request.zip),
        });
        assert!(none.is_none());
        assert_eq!(done.phase, SearchPhase::Results);
        assert_eq!(done.results.len(), 4);
        assert!(done.error.is_none());
    }

    #[test]
    fn test_short_zip_errors_without_touching_results() {
        let state = typed("1234");

        let (next, request) = state.step(ZipEvent::Submit);
        assert!(request.is_none());
        assert_eq!(next.phase, SearchPhase::Error);
        assert!(!next.error.clone().unwrap().is_empty());
        assert_eq!(next.results, state.results);
    }

    #[test]
    fn test_letters_zip_errors() {
        let mut state = ZipSearch::new();
        state.apply(ZipEvent::Input("abcde".to_string()));
        assert_eq!(state.zip, "");

        let request = state.apply(ZipEvent::Submit);
        assert!(request.is_none());
        assert_eq!(state.phase, SearchPhase::Error);
        assert!(state.results.is_empty());
    }

    #[test]
    fn test_error_returns_to_idle_on_keystroke() {
        let mut state = typed("12");
        state.apply(ZipEvent::Submit);
        assert_eq!(state.phase, SearchPhase::Error);

        state.apply(ZipEvent::Input("123".to_string()));
        assert_eq!(state.phase, SearchPhase::Idle);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_error_after_results_keeps_previous_results() {
        let mut state = typed("12345");
        let request = state.apply(ZipEvent::Submit).unwrap();
        state.apply(ZipEvent::LookupFinished {
            generation: request.generation,
            results: sample_results(&request.zip),
        });
        assert_eq!(state.phase, SearchPhase::Results);

        state.apply(ZipEvent::Input("99".to_string()));
        state.apply(ZipEvent::Submit);
        assert_eq!(state.phase, SearchPhase::Error);
        assert_eq!(state.results.len(), 4);
    }

    #[test]
    fn test_resubmit_while_searching_drops_stale_completion() {
        let mut state = typed("12345");
        let first = state.apply(ZipEvent::Submit).unwrap();

        state.apply(ZipEvent::Input("54321".to_string()));
        let second = state.apply(ZipEvent::Submit).unwrap();
        assert!(second.generation > first.generation);
        assert_eq!(second.zip.as_str(), "54321");

        state.apply(ZipEvent::LookupFinished {
            generation: first.generation,
            results: sample_results(&first.zip),
        });
        assert_eq!(state.phase, SearchPhase::Searching);
        assert!(state.results.is_empty());

        state.apply(ZipEvent::LookupFinished {
            generation: second.generation,
            results: sample_results(&second.zip),
        });
        assert_eq!(state.phase, SearchPhase::Results);
    }

    #[test]
    fn test_invalid_submit_while_searching_cancels_lookup() {
        let mut state = typed("12345");
        let request = state.apply(ZipEvent::Submit).unwrap();

        state.apply(ZipEvent::Input("12".to_string()));
        state.apply(ZipEvent::Submit);
        assert_eq!(state.phase, SearchPhase::Error);

        state.apply(ZipEvent::LookupFinished {
            generation: request.generation,
            results: sample_results(&request.zip),
        });
        assert_eq!(state.phase, SearchPhase::Error);
        assert!(state.results.is_empty());
    }

    #[test]
    fn test_step_does_not_mutate_source_state() {
        let state = typed("12345");
        let before = state.clone();

        let _ = state.step(ZipEvent::Submit);
        assert_eq!(state, before);
    }

    #[test]
    fn test_sample_lookup_ignores_zip() {
        let a = SampleAvailability.lookup(&validate_zip("10001").unwrap());
        let b = SampleAvailability.lookup(&validate_zip("90210").unwrap());

        assert_eq!(a, b);
        assert_eq!(
            a.iter().map(|p| p.name).collect::<Vec<_>>(),
            vec!["Verizon", "Spectrum", "AT&T", "Optimum"]
        );
    }
}
