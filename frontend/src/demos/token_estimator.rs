use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

pub struct ModelPrice {
    pub name: &'static str,
    pub input_per_million: f64,
    pub output_per_million: f64,
}

/// USD list prices per million tokens, rounded.
pub const MODELS: &[ModelPrice] = &[
    ModelPrice { name: "GPT-4o", input_per_million: 2.50, output_per_million: 10.00 },
    ModelPrice { name: "GPT-4o mini", input_per_million: 0.15, output_per_million: 0.60 },
    ModelPrice { name: "Claude Sonnet", input_per_million: 3.00, output_per_million: 15.00 },
    ModelPrice { name: "Claude Haiku", input_per_million: 0.80, output_per_million: 4.00 },
    ModelPrice { name: "Llama 3 70B (hosted)", input_per_million: 0.60, output_per_million: 0.80 },
];

const CHARS_PER_TOKEN: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenEstimate {
    pub chars: usize,
    pub words: usize,
    pub tokens: usize,
}

pub fn estimate(text: &str) -> TokenEstimate {
    let chars = text.chars().count();
    TokenEstimate {
        chars,
        words: text.split_whitespace().count(),
        tokens: chars.div_ceil(CHARS_PER_TOKEN),
    }
}

pub fn request_cost(model: &ModelPrice, input_tokens: usize, output_tokens: usize) -> f64 {
    (input_tokens as f64 * model.input_per_million + output_tokens as f64 * model.output_per_million)
        / 1_000_000.0
}

fn format_usd(value: f64) -> String {
    if value > 0.0 && value < 0.01 {
        format!("${value:.5}")
    } else {
        format!("${value:.2}")
    }
}

const SAMPLE_PROMPT: &str = "You are a helpful assistant for a logistics company. Summarize the attached bill of lading and list any fields that look inconsistent.";

#[function_component(TokenEstimator)]
pub fn token_estimator() -> Html {
    let text = use_state(|| SAMPLE_PROMPT.to_string());
    let output_tokens = use_state(|| 500usize);
    let requests_per_day = use_state(|| 1_000usize);

    let estimate = estimate(&text);

    let on_text = {
        let text = text.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            text.set(area.value());
        })
    };
    let on_output = {
        let output_tokens = output_tokens.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            output_tokens.set(input.value().parse().unwrap_or(0));
        })
    };
    let on_requests = {
        let requests_per_day = requests_per_day.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            requests_per_day.set(input.value().parse().unwrap_or(0));
        })
    };

    html! {
        <div class="demo-widget token-estimator">
            <textarea rows="8" value={(*text).clone()} oninput={on_text} placeholder="Paste a prompt..." />
            <div class="demo-stats">
                <span>{format!("{} characters", estimate.chars)}</span>
                <span>{format!("{} words", estimate.words)}</span>
                <span class="highlight">{format!("≈ {} tokens", estimate.tokens)}</span>
            </div>
            <div class="demo-controls">
                <label>
                    {"Expected response tokens"}
                    <input type="number" min="0" value={output_tokens.to_string()} oninput={on_output} />
                </label>
                <label>
                    {"Requests per day"}
                    <input type="number" min="0" value={requests_per_day.to_string()} oninput={on_requests} />
                </label>
            </div>
            <table class="demo-table">
                <thead>
                    <tr><th>{"Model"}</th><th>{"Per request"}</th><th>{"Per month (30 days)"}</th></tr>
                </thead>
                <tbody>
                    { for MODELS.iter().map(|model| {
                        let per_request = request_cost(model, estimate.tokens, *output_tokens);
                        let per_month = per_request * (*requests_per_day as f64) * 30.0;
                        html! {
                            <tr>
                                <td>{model.name}</td>
                                <td>{format_usd(per_request)}</td>
                                <td>{format_usd(per_month)}</td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
            <p class="demo-hint">{"Rule of thumb: one token is roughly four characters of English text. Real tokenizers vary by model."}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_tokens() {
        assert_eq!(estimate(""), TokenEstimate::default());
    }

    #[test]
    fn tokens_round_up() {
        let e = estimate("hello");
        assert_eq!(e.chars, 5);
        assert_eq!(e.words, 1);
        assert_eq!(e.tokens, 2);
        assert_eq!(estimate("abcd").tokens, 1);
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(estimate("äöü ß").chars, 5);
        assert_eq!(estimate("  spaced   out  words ").words, 3);
    }

    #[test]
    fn cost_scales_per_million() {
        let model = ModelPrice { name: "test", input_per_million: 2.0, output_per_million: 8.0 };
        let cost = request_cost(&model, 1_000_000, 500_000);
        assert!((cost - 6.0).abs() < 1e-9);
    }

    #[test]
    fn tiny_costs_keep_precision() {
        assert_eq!(format_usd(0.00042), "$0.00042");
        assert_eq!(format_usd(12.5), "$12.50");
        assert_eq!(format_usd(0.0), "$0.00");
    }
}
