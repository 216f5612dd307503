use yew::prelude::*;
use kaycore_common::JobOpportunity;
use crate::config::CONTACT_EMAIL;
use crate::content::careers::{departments, job_openings, openings_in};

fn apply_link(job: &JobOpportunity) -> String {
    let subject = format!("Application: {}", job.title);
    format!("mailto:{}?subject={}", CONTACT_EMAIL, urlencoding::encode(&subject))
}

#[function_component(Careers)]
pub fn careers() -> Html {
    let jobs = use_memo(|_| job_openings(), ());
    let department = use_state(|| "All".to_string());
    let expanded = use_state(|| None::<u32>);

    let visible = openings_in(&jobs, &department);

    html! {
        <div class="careers-page">
            <section class="careers-hero">
                <h1>{"Careers"}</h1>
                <p>{"Small teams, real clients, no bench time. We hire engineers who like owning a system end to end."}</p>
            </section>
            <section class="careers-section">
                <div class="category-pills">
                    { for departments(&jobs).into_iter().map(|d| {
                        let active = d == *department;
                        let onclick = {
                            let department = department.clone();
                            let d = d.clone();
                            Callback::from(move |_: MouseEvent| department.set(d.clone()))
                        };
                        html! {
                            <button class={classes!("category-pill", active.then_some("active"))} {onclick}>{d}</button>
                        }
                    }) }
                </div>
                if visible.is_empty() {
                    <p class="careers-empty">{"No open roles in this department right now."}</p>
                }
                { for visible.into_iter().map(|job| {
                    let open = *expanded == Some(job.id);
                    let toggle = {
                        let expanded = expanded.clone();
                        let id = job.id;
                        Callback::from(move |_: MouseEvent| {
                            expanded.set(if *expanded == Some(id) { None } else { Some(id) });
                        })
                    };
                    html! {
                        <div class={classes!("job-card", open.then_some("open"))} key={job.id}>
                            <button class="job-header" onclick={toggle}>
                                <div>
                                    <h3>{&job.title}</h3>
                                    <span class="job-meta">{format!("{} · {} · {}", job.department, job.location, job.employment_type)}</span>
                                </div>
                                <span class="job-toggle">{ if open { "−" } else { "+" } }</span>
                            </button>
                            if open {
                                <div class="job-body">
                                    <p>{&job.description}</p>
                                    <h4>{"What we look for"}</h4>
                                    <ul>
                                        { for job.requirements.iter().map(|r| html! { <li>{r}</li> }) }
                                    </ul>
                                    <a class="primary-button" href={apply_link(job)}>{"Apply"}</a>
                                </div>
                            }
                        </div>
                    }
                }) }
            </section>
            <style>
                {r#"
                .careers-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                }
                .careers-hero {
                    text-align: center;
                    padding: 6rem 2rem 3rem;
                }
                .careers-hero h1 {
                    font-size: 3.5rem;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .careers-hero p {
                    font-size: 1.2rem;
                    color: #999;
                    max-width: 640px;
                    margin: 0 auto;
                }
                .careers-section {
                    max-width: 860px;
                    margin: 0 auto;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .job-card {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                }
                .job-card.open {
                    border-color: rgba(30, 144, 255, 0.35);
                }
                .job-header {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: none;
                    border: none;
                    color: inherit;
                    text-align: left;
                    padding: 1.5rem;
                    cursor: pointer;
                }
                .job-meta {
                    color: #999;
                    font-size: 0.9rem;
                }
                .job-toggle {
                    font-size: 1.6rem;
                    color: #7EB2FF;
                }
                .job-body {
                    padding: 0 1.5rem 1.5rem;
                    color: #ccc;
                }
                .careers-empty {
                    color: #999;
                    text-align: center;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_link_encodes_subject() {
        let job = &job_openings()[0];
        let link = apply_link(job);
        assert!(link.starts_with("mailto:hello@kaycore.com?subject=Application%3A%20"));
        assert!(!link.contains(' '));
    }
}
