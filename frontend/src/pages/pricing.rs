use yew::prelude::*;
use yew_router::components::Link;
use crate::Route;

struct Tier {
    name: &'static str,
    price: &'static str,
    period: &'static str,
    summary: &'static str,
    features: &'static [&'static str],
    highlighted: bool,
}

const TIERS: &[Tier] = &[
    Tier {
        name: "Discovery Sprint",
        price: "€9,500",
        period: "fixed, two weeks",
        summary: "Find out what to build and what it will take before committing a budget.",
        features: &[
            "Stakeholder and systems interviews",
            "Architecture and risk review",
            "Prioritized roadmap with estimates",
            "Working prototype of the riskiest piece",
        ],
        highlighted: false,
    },
    Tier {
        name: "Project Team",
        price: "from €38,000",
        period: "per month",
        summary: "A dedicated cross-functional team that designs, builds and hands over production software.",
        features: &[
            "Tech lead plus three to five engineers",
            "Two-week delivery cadence with demos",
            "Infrastructure as code and CI/CD included",
            "Documentation and handover training",
        ],
        highlighted: true,
    },
    Tier {
        name: "Reliability Retainer",
        price: "from €6,000",
        period: "per month",
        summary: "Ongoing care for systems we built or inherited: on-call, upgrades and cost reviews.",
        features: &[
            "Business-hours or 24/7 on-call options",
            "Monthly security patching",
            "Quarterly cloud cost review",
            "Guaranteed response times",
        ],
        highlighted: false,
    },
];

const FAQ: &[(&str, &str)] = &[
    ("Do you work fixed-price?", "Discovery sprints are fixed-price. Larger projects are billed monthly against a capped estimate that we revisit every sprint."),
    ("Who owns the code?", "You do, from the first commit. Repositories live in your organization."),
    ("Can you work with our in-house team?", "Most of our projects are mixed teams. We pair with your engineers so knowledge stays when we leave."),
];

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <div class="pricing-page">
            <section class="pricing-hero">
                <h1>{"Pricing"}</h1>
                <p>{"Transparent engagement models. Every proposal comes with a written estimate and a named team."}</p>
            </section>
            <section class="pricing-grid">
                { for TIERS.iter().map(|tier| html! {
                    <div class={classes!("pricing-card", tier.highlighted.then_some("highlighted"))}>
                        if tier.highlighted {
                            <span class="pricing-badge">{"Most popular"}</span>
                        }
                        <h3>{tier.name}</h3>
                        <div class="pricing-price">{tier.price}</div>
                        <div class="pricing-period">{tier.period}</div>
                        <p>{tier.summary}</p>
                        <ul>
                            { for tier.features.iter().map(|f| html! { <li>{*f}</li> }) }
                        </ul>
                        <Link<Route> to={Route::Contact} classes="primary-button">{"Request a proposal"}</Link<Route>>
                    </div>
                }) }
            </section>
            <section class="page-section pricing-faq">
                <h2>{"Questions"}</h2>
                { for FAQ.iter().map(|(q, a)| html! {
                    <details>
                        <summary>{*q}</summary>
                        <p>{*a}</p>
                    </details>
                }) }
            </section>
            <style>
                {r#"
                .pricing-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                }
                .pricing-hero {
                    text-align: center;
                    padding: 6rem 2rem 3rem;
                }
                .pricing-hero h1 {
                    font-size: 3.5rem;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .pricing-hero p {
                    font-size: 1.2rem;
                    color: #999;
                }
                .pricing-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 2rem;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .pricing-card {
                    position: relative;
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 16px;
                    padding: 2.5rem 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .pricing-card.highlighted {
                    border-color: #1E90FF;
                    box-shadow: 0 0 40px rgba(30, 144, 255, 0.15);
                }
                .pricing-badge {
                    position: absolute;
                    top: -0.8rem;
                    left: 50%;
                    transform: translateX(-50%);
                    background: #1E90FF;
                    padding: 0.25rem 1rem;
                    border-radius: 999px;
                    font-size: 0.8rem;
                }
                .pricing-price {
                    font-size: 2.2rem;
                    font-weight: 700;
                    color: #7EB2FF;
                }
                .pricing-period {
                    color: #666;
                }
                .pricing-card ul {
                    padding-left: 1.2rem;
                    color: #ccc;
                    flex: 1;
                }
                .pricing-faq details {
                    border-bottom: 1px solid rgba(30, 144, 255, 0.1);
                    padding: 1rem 0;
                }
                .pricing-faq summary {
                    cursor: pointer;
                    font-weight: 600;
                }
                .pricing-faq p {
                    color: #999;
                }
                @media (max-width: 900px) {
                    .pricing-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
