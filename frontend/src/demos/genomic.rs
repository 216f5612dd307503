use regex::RegexBuilder;
use thiserror::Error;
use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

#[derive(Debug, Error, PartialEq)]
pub enum GenomicError {
    #[error("Invalid base '{base}' at position {position}; only A, C, G and T are allowed")]
    InvalidBase { base: char, position: usize },
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Highlight {
    pub segments: Vec<Segment>,
    pub matches: usize,
    pub gc_percent: f64,
}

/// Uppercases and drops whitespace. Positions in errors are 1-based over the normalized sequence.
pub fn normalize_sequence(raw: &str) -> Result<String, GenomicError> {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars().filter(|c| !c.is_whitespace()) {
        let base = c.to_ascii_uppercase();
        if !matches!(base, 'A' | 'C' | 'G' | 'T') {
            return Err(GenomicError::InvalidBase { base: c, position: out.len() + 1 });
        }
        out.push(base);
    }
    Ok(out)
}

pub fn gc_content(sequence: &str) -> f64 {
    if sequence.is_empty() {
        return 0.0;
    }
    let gc = sequence.chars().filter(|c| matches!(c, 'G' | 'C')).count();
    gc as f64 * 100.0 / sequence.len() as f64
}

pub fn highlight(raw_sequence: &str, pattern: &str) -> Result<Highlight, GenomicError> {
    let sequence = normalize_sequence(raw_sequence)?;
    let gc_percent = gc_content(&sequence);

    if pattern.trim().is_empty() {
        let segments = if sequence.is_empty() {
            Vec::new()
        } else {
            vec![Segment { text: sequence, highlighted: false }]
        };
        return Ok(Highlight { segments, matches: 0, gc_percent });
    }

    let re = RegexBuilder::new(pattern.trim())
        .case_insensitive(true)
        .size_limit(1 << 20)
        .build()
        .map_err(|e| GenomicError::InvalidPattern(e.to_string()))?;

    let mut segments = Vec::new();
    let mut matches = 0;
    let mut cursor = 0;
    for m in re.find_iter(&sequence).filter(|m| !m.as_str().is_empty()) {
        if m.start() > cursor {
            segments.push(Segment { text: sequence[cursor..m.start()].to_string(), highlighted: false });
        }
        segments.push(Segment { text: m.as_str().to_string(), highlighted: true });
        matches += 1;
        cursor = m.end();
    }
    if cursor < sequence.len() {
        segments.push(Segment { text: sequence[cursor..].to_string(), highlighted: false });
    }

    Ok(Highlight { segments, matches, gc_percent })
}

const SAMPLE_SEQUENCE: &str = "ATGGCGTACGTTAGCTAGGATCCGATCGTATAAAGGCTAGCTTAAGGATCCATGCGT";
const SAMPLE_PATTERN: &str = "GGATCC";

#[function_component(GenomicHighlighter)]
pub fn genomic_highlighter() -> Html {
    let sequence = use_state(|| SAMPLE_SEQUENCE.to_string());
    let pattern = use_state(|| SAMPLE_PATTERN.to_string());
    let result = highlight(&sequence, &pattern);

    let on_sequence = {
        let sequence = sequence.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            sequence.set(area.value());
        })
    };
    let on_pattern = {
        let pattern = pattern.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            pattern.set(input.value());
        })
    };

    html! {
        <div class="demo-widget genomic">
            <label>
                {"DNA sequence"}
                <textarea rows="4" value={(*sequence).clone()} oninput={on_sequence} spellcheck="false" />
            </label>
            <label>
                {"Motif (regular expression, e.g. GGATCC or TA[AT]A)"}
                <input type="text" value={(*pattern).clone()} oninput={on_pattern} spellcheck="false" />
            </label>
            {
                match result {
                    Ok(found) => html! {
                        <>
                            <div class="demo-stats">
                                <span class="highlight">{format!("{} matches", found.matches)}</span>
                                <span>{format!("GC content {:.1}%", found.gc_percent)}</span>
                            </div>
                            <pre class="sequence-view">
                                { for found.segments.iter().map(|s| if s.highlighted {
                                    html! { <mark>{&s.text}</mark> }
                                } else {
                                    html! { <span>{&s.text}</span> }
                                }) }
                            </pre>
                        </>
                    },
                    Err(e) => html! { <p class="field-error">{e.to_string()}</p> },
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejoin(h: &Highlight) -> String {
        h.segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(normalize_sequence(" acg\nT t ").unwrap(), "ACGTT");
    }

    #[test]
    fn rejects_foreign_bases() {
        assert_eq!(
            normalize_sequence("AC GX"),
            Err(GenomicError::InvalidBase { base: 'X', position: 4 })
        );
    }

    #[test]
    fn highlights_every_match() {
        let h = highlight("aaGGATCCttGGATCC", "ggatcc").unwrap();
        assert_eq!(h.matches, 2);
        assert_eq!(
            h.segments,
            vec![
                Segment { text: "AA".into(), highlighted: false },
                Segment { text: "GGATCC".into(), highlighted: true },
                Segment { text: "TT".into(), highlighted: false },
                Segment { text: "GGATCC".into(), highlighted: true },
            ]
        );
    }

    #[test]
    fn segments_rebuild_the_sequence() {
        let raw = "ATG gcg TAC gtt AGC tag GAT ccg";
        let normalized = normalize_sequence(raw).unwrap();
        for pattern in ["", "A", "G+", "T?", "(AT|GC)", "CCC", "x*"] {
            let h = highlight(raw, pattern).unwrap();
            assert_eq!(rejoin(&h), normalized, "pattern {pattern:?}");
        }
    }

    #[test]
    fn empty_matches_are_not_counted() {
        let h = highlight("ACGT", "T?").unwrap();
        assert_eq!(h.matches, 1);
    }

    #[test]
    fn bad_pattern_is_an_error_not_a_panic() {
        assert!(matches!(highlight("ACGT", "(AC"), Err(GenomicError::InvalidPattern(_))));
    }

    #[test]
    fn gc_percentage() {
        assert_eq!(gc_content(""), 0.0);
        assert_eq!(gc_content("GGCC"), 100.0);
        assert_eq!(gc_content("ATGC"), 50.0);
    }
}
