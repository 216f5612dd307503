use yew::prelude::*;
use yew_router::components::Link;
use crate::demos::{
    chaos_mesh::ChaosMesh, cloud_cost::CloudCostEstimator, document_pipeline::DocumentPipeline,
    genomic::GenomicHighlighter, kanban::KanbanBoard, loan_calculator::LoanCalculator,
    token_estimator::TokenEstimator,
};
use crate::Route;

pub struct DemoInfo {
    pub slug: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub tag: &'static str,
}

pub const DEMOS: &[DemoInfo] = &[
    DemoInfo {
        slug: "loan-calculator",
        title: "Loan Calculator",
        blurb: "Amortized payments with a live balance chart, the kind of widget we embed in lending portals.",
        tag: "FinTech",
    },
    DemoInfo {
        slug: "token-estimator",
        title: "LLM Token Estimator",
        blurb: "Estimate prompt size and monthly spend across popular models before you commit to one.",
        tag: "AI",
    },
    DemoInfo {
        slug: "kanban",
        title: "Kanban Board",
        blurb: "Drag-and-drop task board, the starting point of most internal tools we build.",
        tag: "Productivity",
    },
    DemoInfo {
        slug: "chaos-mesh",
        title: "Chaos Mesh Visualizer",
        blurb: "Inject faults into a service mesh and watch failures cascade and recover.",
        tag: "Reliability",
    },
    DemoInfo {
        slug: "cloud-cost",
        title: "Cloud Cost Estimator",
        blurb: "Compare a small deployment across AWS, Azure and Google Cloud.",
        tag: "Cloud",
    },
    DemoInfo {
        slug: "genomic-highlighter",
        title: "Genomic Pattern Highlighter",
        blurb: "Find motifs in a DNA sequence with regular expressions and see GC content at a glance.",
        tag: "Life Sciences",
    },
    DemoInfo {
        slug: "document-pipeline",
        title: "Document Processing Pipeline",
        blurb: "Follow an invoice through upload, OCR, extraction and validation.",
        tag: "Automation",
    },
];

pub fn find_demo(slug: &str) -> Option<&'static DemoInfo> {
    DEMOS.iter().find(|d| d.slug == slug)
}

fn demo_widget(slug: &str) -> Html {
    match slug {
        "loan-calculator" => html! { <LoanCalculator /> },
        "token-estimator" => html! { <TokenEstimator /> },
        "kanban" => html! { <KanbanBoard /> },
        "chaos-mesh" => html! { <ChaosMesh /> },
        "cloud-cost" => html! { <CloudCostEstimator /> },
        "genomic-highlighter" => html! { <GenomicHighlighter /> },
        "document-pipeline" => html! { <DocumentPipeline /> },
        _ => html! {},
    }
}

const DEMO_STYLE: &str = r#"
.demos-page {
    padding-top: 74px;
    min-height: 100vh;
    color: #ffffff;
}
.demos-hero {
    text-align: center;
    padding: 6rem 2rem 3rem;
}
.demos-hero h1 {
    font-size: 3.5rem;
    margin-bottom: 1.5rem;
    background: linear-gradient(45deg, #fff, #7EB2FF);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.demos-hero p {
    font-size: 1.2rem;
    color: #999;
    max-width: 640px;
    margin: 0 auto;
}
.demo-stage {
    max-width: 1000px;
    margin: 0 auto;
    padding: 2rem;
}
.demo-widget {
    background: rgba(26, 26, 26, 0.85);
    border: 1px solid rgba(30, 144, 255, 0.15);
    border-radius: 16px;
    padding: 2rem;
    display: flex;
    flex-direction: column;
    gap: 1.25rem;
}
.demo-widget textarea, .demo-widget input, .demo-widget select {
    padding: 0.7rem 0.9rem;
    border-radius: 8px;
    border: 1px solid rgba(255, 255, 255, 0.1);
    background: rgba(0, 0, 0, 0.3);
    color: #fff;
    font-family: inherit;
}
.demo-controls {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: 1rem;
}
.demo-controls label, .demo-widget > label {
    display: flex;
    flex-direction: column;
    gap: 0.4rem;
    color: #ccc;
}
.demo-results {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1rem;
}
.result-card {
    background: rgba(0, 0, 0, 0.25);
    border-radius: 10px;
    padding: 1rem;
    display: flex;
    flex-direction: column;
}
.result-card.highlight .result-value, .highlight {
    color: #7EB2FF;
}
.result-label {
    color: #999;
    font-size: 0.85rem;
}
.result-value {
    font-size: 1.6rem;
    font-weight: 700;
}
.demo-stats {
    display: flex;
    gap: 1.5rem;
    color: #ccc;
}
.demo-table {
    width: 100%;
    border-collapse: collapse;
}
.demo-table td, .demo-table th {
    text-align: left;
    padding: 0.6rem;
    border-bottom: 1px solid rgba(255, 255, 255, 0.06);
}
.demo-hint {
    color: #777;
    font-size: 0.9rem;
}
.demo-buttons {
    display: flex;
    gap: 1rem;
}
.demo-button {
    background: #1E90FF;
    color: #fff;
    border: none;
    border-radius: 8px;
    padding: 0.7rem 1.4rem;
    cursor: pointer;
}
.demo-button.secondary {
    background: transparent;
    border: 1px solid rgba(30, 144, 255, 0.4);
    align-self: flex-start;
}
.demo-button:disabled {
    opacity: 0.5;
    cursor: default;
}
.kanban-columns {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 1rem;
}
.kanban-column {
    background: rgba(0, 0, 0, 0.25);
    border-radius: 10px;
    padding: 0.75rem;
    min-height: 240px;
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}
.kanban-count {
    margin-left: 0.5rem;
    color: #666;
}
.kanban-card {
    display: flex;
    justify-content: space-between;
    gap: 0.5rem;
    background: rgba(30, 144, 255, 0.08);
    border: 1px solid rgba(30, 144, 255, 0.2);
    border-radius: 8px;
    padding: 0.6rem;
    cursor: grab;
}
.kanban-remove {
    background: none;
    border: none;
    color: #777;
    cursor: pointer;
}
.kanban-add input {
    width: 100%;
    box-sizing: border-box;
}
.mesh-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1rem;
}
.mesh-node {
    display: flex;
    flex-direction: column;
    gap: 0.3rem;
    border-radius: 10px;
    padding: 1rem;
    color: #fff;
    cursor: pointer;
    border: 1px solid transparent;
    transition: all 0.3s ease;
}
.mesh-node.healthy { background: rgba(46, 204, 113, 0.15); border-color: rgba(46, 204, 113, 0.4); }
.mesh-node.degraded { background: rgba(241, 196, 15, 0.15); border-color: rgba(241, 196, 15, 0.5); }
.mesh-node.down { background: rgba(231, 76, 60, 0.2); border-color: rgba(231, 76, 60, 0.6); }
.mesh-node.recovering { background: rgba(30, 144, 255, 0.15); border-color: rgba(30, 144, 255, 0.5); }
.mesh-deps {
    color: #999;
    font-size: 0.8rem;
}
.mesh-log ul {
    font-family: monospace;
    color: #aaa;
    padding-left: 1rem;
}
.sequence-view {
    white-space: pre-wrap;
    word-break: break-all;
    font-family: monospace;
    background: rgba(0, 0, 0, 0.3);
    padding: 1rem;
    border-radius: 8px;
}
.sequence-view mark {
    background: rgba(30, 144, 255, 0.45);
    color: #fff;
}
.pipeline-stages {
    list-style: none;
    padding: 0;
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
}
.pipeline-stage {
    padding: 0.75rem 1rem;
    border-radius: 8px;
    background: rgba(0, 0, 0, 0.25);
    color: #777;
}
.pipeline-stage.active { color: #fff; border: 1px solid rgba(30, 144, 255, 0.4); }
.pipeline-stage.done { color: #2ecc71; }
.progress-bar {
    height: 6px;
    border-radius: 3px;
    background: rgba(255, 255, 255, 0.08);
    margin-top: 0.5rem;
    overflow: hidden;
}
.progress-fill {
    height: 100%;
    background: #1E90FF;
    transition: width 0.3s ease;
}
@media (max-width: 768px) {
    .kanban-columns, .mesh-grid, .demo-results {
        grid-template-columns: 1fr;
    }
}
"#;

#[function_component(DemosIndex)]
pub fn demos_index() -> Html {
    html! {
        <div class="demos-page">
            <section class="demos-hero">
                <h1>{"Demos"}</h1>
                <p>{"Small, self-contained pieces of the things we build for clients. Everything runs in your browser with made-up data."}</p>
            </section>
            <section class="page-section">
                <div class="card-grid">
                    { for DEMOS.iter().map(|demo| html! {
                        <Link<Route> to={Route::Demo { demo: demo.slug.to_string() }} classes="card">
                            <span class="card-tag">{demo.tag}</span>
                            <h3>{demo.title}</h3>
                            <p>{demo.blurb}</p>
                        </Link<Route>>
                    }) }
                </div>
            </section>
            <style>{DEMO_STYLE}</style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DemoPageProps {
    pub demo: String,
}

#[function_component(DemoPage)]
pub fn demo_page(props: &DemoPageProps) -> Html {
    let body = match find_demo(&props.demo) {
        Some(info) => html! {
            <>
                <section class="demos-hero">
                    <h1>{info.title}</h1>
                    <p>{info.blurb}</p>
                </section>
                <section class="demo-stage">
                    { demo_widget(info.slug) }
                </section>
            </>
        },
        None => html! {
            <section class="demos-hero">
                <h1>{"Demo not found"}</h1>
                <p>
                    <Link<Route> to={Route::Demos}>{"Back to all demos"}</Link<Route>>
                </p>
            </section>
        },
    };

    html! {
        <div class="demos-page">
            { body }
            <style>{DEMO_STYLE}</style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_slugs_are_unique_and_resolvable() {
        for (i, demo) in DEMOS.iter().enumerate() {
            assert!(DEMOS.iter().skip(i + 1).all(|d| d.slug != demo.slug));
            assert!(find_demo(demo.slug).is_some());
        }
        assert!(find_demo("nope").is_none());
    }
}
