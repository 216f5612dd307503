use yew::prelude::*;
use crate::config::CONTACT_EMAIL;

const LAST_UPDATED: &str = "March 1, 2025";

type Section = (&'static str, &'static [&'static str]);

const PRIVACY: &[Section] = &[
    ("What we collect", &[
        "When you use the contact form we receive your name, email address, company and whatever you write in the message. We use this only to reply to you.",
        "Our servers keep standard access logs (IP address, browser, requested page) for up to 30 days to keep the site secure.",
    ]),
    ("What we don't do", &[
        "We don't sell personal data, run advertising trackers or build marketing profiles.",
    ]),
    ("Processors", &[
        "Contact form messages are delivered by email through Resend. Error reports may be sent to Sentry with personal data stripped.",
    ]),
    ("Your rights", &[
        "You can ask us to show, correct or delete anything we hold about you. Email us and we will respond within 30 days.",
    ]),
];

const TERMS: &[Section] = &[
    ("Use of this site", &[
        "Content on this site is provided for general information. It is not professional advice for your specific situation.",
        "Demos run entirely in your browser with fabricated data and carry no warranty.",
    ]),
    ("Intellectual property", &[
        "Text, graphics and code on this site belong to Kaycore unless stated otherwise. Client engagements are governed by their own contracts.",
    ]),
    ("Liability", &[
        "We are not liable for losses arising from use of information on this site to the extent permitted by law.",
    ]),
    ("Governing law", &[
        "These terms are governed by the laws of Finland.",
    ]),
];

const COOKIES: &[Section] = &[
    ("Cookies we use", &[
        "None for tracking. The site itself works without cookies.",
        "Your browser may cache files to load pages faster; this is not used to identify you.",
    ]),
    ("Third parties", &[
        "Embedded partner links open partner sites, which have their own cookie policies.",
    ]),
];

#[derive(Properties, PartialEq)]
struct LegalPageProps {
    title: AttrValue,
    sections: &'static [Section],
}

#[function_component(LegalPage)]
fn legal_page(props: &LegalPageProps) -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            props.title.clone(),
        );
    }

    html! {
        <div class="legal-page">
            <div class="legal-content">
                <h1>{props.title.clone()}</h1>
                <p class="legal-updated">{format!("Last updated: {}", LAST_UPDATED)}</p>
                { for props.sections.iter().map(|(heading, paragraphs)| html! {
                    <section>
                        <h2>{*heading}</h2>
                        { for paragraphs.iter().map(|p| html! { <p>{*p}</p> }) }
                    </section>
                }) }
                <section>
                    <h2>{"Contact"}</h2>
                    <p>
                        {"Questions? Write to "}
                        <a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                        {"."}
                    </p>
                </section>
            </div>
            <style>
                {r#"
                .legal-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                }
                .legal-content {
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }
                .legal-content h1 {
                    font-size: 2.8rem;
                    margin-bottom: 0.5rem;
                }
                .legal-updated {
                    color: #666;
                    margin-bottom: 2rem;
                }
                .legal-content h2 {
                    margin-top: 2rem;
                    color: #7EB2FF;
                }
                .legal-content p {
                    color: #ccc;
                    line-height: 1.7;
                }
                .legal-content a {
                    color: #7EB2FF;
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! { <LegalPage title="Privacy Policy" sections={PRIVACY} /> }
}

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! { <LegalPage title="Terms of Service" sections={TERMS} /> }
}

#[function_component(CookiePolicy)]
pub fn cookie_policy() -> Html {
    html! { <LegalPage title="Cookie Policy" sections={COOKIES} /> }
}
