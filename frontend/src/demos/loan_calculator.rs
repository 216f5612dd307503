use yew::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlInputElement};
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use log::warn;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoanInputs {
    pub principal: f64,
    pub annual_rate_pct: f64,
    pub years: u32,
}

impl Default for LoanInputs {
    fn default() -> Self {
        Self {
            principal: 250_000.0,
            annual_rate_pct: 5.5,
            years: 25,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YearBalance {
    pub year: u32,
    pub balance: f64,
    pub interest_paid: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoanSummary {
    pub monthly_payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
    pub schedule: Vec<YearBalance>,
}

/// Standard amortized payment. `None` for inputs that describe no loan.
pub fn monthly_payment(principal: f64, annual_rate_pct: f64, years: u32) -> Option<f64> {
    if !principal.is_finite() || principal <= 0.0 || years == 0 {
        return None;
    }
    if !annual_rate_pct.is_finite() || annual_rate_pct < 0.0 {
        return None;
    }
    let n = f64::from(years * 12);
    let r = annual_rate_pct / 12.0 / 100.0;
    if r == 0.0 {
        return Some(principal / n);
    }
    Some(principal * r / (1.0 - (1.0 + r).powf(-n)))
}

pub fn summarize(inputs: LoanInputs) -> Option<LoanSummary> {
    let payment = monthly_payment(inputs.principal, inputs.annual_rate_pct, inputs.years)?;
    let r = inputs.annual_rate_pct / 12.0 / 100.0;

    let mut balance = inputs.principal;
    let mut interest_this_year = 0.0;
    let mut schedule = Vec::with_capacity(inputs.years as usize);
    for month in 1..=inputs.years * 12 {
        let interest = balance * r;
        interest_this_year += interest;
        balance = (balance + interest - payment).max(0.0);
        if month % 12 == 0 {
            schedule.push(YearBalance {
                year: month / 12,
                balance,
                interest_paid: interest_this_year,
            });
            interest_this_year = 0.0;
        }
    }

    let total_paid = payment * f64::from(inputs.years * 12);
    Some(LoanSummary {
        monthly_payment: payment,
        total_paid,
        total_interest: total_paid - inputs.principal,
        schedule,
    })
}

fn draw_balance_chart(
    canvas: &HtmlCanvasElement,
    principal: f64,
    schedule: &[YearBalance],
) -> Result<(), Box<dyn std::error::Error>> {
    let backend = CanvasBackend::with_canvas_object(canvas.clone())
        .ok_or("canvas has no 2d context")?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let years = schedule.len() as u32;
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption("Remaining balance", ("sans-serif", 18))
        .x_label_area_size(30)
        .y_label_area_size(70)
        .build_cartesian_2d(0u32..years.max(1), 0.0..principal * 1.05)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Year")
        .y_label_formatter(&|y| format!("{:.0}k", y / 1000.0))
        .draw()?;

    let points = std::iter::once((0u32, principal))
        .chain(schedule.iter().map(|y| (y.year, y.balance)));
    chart.draw_series(AreaSeries::new(points, 0.0, RGBColor(30, 144, 255).mix(0.3)).border_style(BLUE))?;

    root.present()?;
    Ok(())
}

fn format_money(value: f64) -> String {
    let whole = value.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if whole < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

#[function_component(LoanCalculator)]
pub fn loan_calculator() -> Html {
    let inputs = use_state(LoanInputs::default);
    let canvas_ref = use_node_ref();
    let summary = summarize(*inputs);

    {
        let canvas_ref = canvas_ref.clone();
        let summary = summary.clone();
        let principal = inputs.principal;
        use_effect_with_deps(
            move |_| {
                if let (Some(canvas), Some(summary)) = (canvas_ref.cast::<HtmlCanvasElement>(), summary) {
                    if let Err(e) = draw_balance_chart(&canvas, principal, &summary.schedule) {
                        warn!("Could not draw loan chart: {}", e);
                    }
                }
                || ()
            },
            *inputs,
        );
    }

    let on_principal = {
        let inputs = inputs.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let principal = input.value().parse().unwrap_or(0.0);
            inputs.set(LoanInputs { principal, ..*inputs });
        })
    };
    let on_rate = {
        let inputs = inputs.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let annual_rate_pct = input.value().parse().unwrap_or(0.0);
            inputs.set(LoanInputs { annual_rate_pct, ..*inputs });
        })
    };
    let on_years = {
        let inputs = inputs.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let years = input.value().parse().unwrap_or(0);
            inputs.set(LoanInputs { years, ..*inputs });
        })
    };

    html! {
        <div class="demo-widget loan-calculator">
            <div class="demo-controls">
                <label>
                    {"Loan amount"}
                    <input type="number" min="0" step="1000" value={inputs.principal.to_string()} oninput={on_principal} />
                </label>
                <label>
                    {format!("Interest rate: {:.2}%", inputs.annual_rate_pct)}
                    <input type="range" min="0" max="15" step="0.05" value={inputs.annual_rate_pct.to_string()} oninput={on_rate} />
                </label>
                <label>
                    {format!("Term: {} years", inputs.years)}
                    <input type="range" min="1" max="40" step="1" value={inputs.years.to_string()} oninput={on_years} />
                </label>
            </div>
            {
                if let Some(summary) = &summary {
                    html! {
                        <div class="demo-results">
                            <div class="result-card highlight">
                                <span class="result-label">{"Monthly payment"}</span>
                                <span class="result-value">{format_money(summary.monthly_payment)}</span>
                            </div>
                            <div class="result-card">
                                <span class="result-label">{"Total paid"}</span>
                                <span class="result-value">{format_money(summary.total_paid)}</span>
                            </div>
                            <div class="result-card">
                                <span class="result-label">{"Total interest"}</span>
                                <span class="result-value">{format_money(summary.total_interest)}</span>
                            </div>
                        </div>
                    }
                } else {
                    html! { <p class="demo-hint">{"Enter a loan amount and a term of at least one year."}</p> }
                }
            }
            <canvas ref={canvas_ref} width="600" height="320" style="max-width: 100%;" />
        </div>
    }
}
