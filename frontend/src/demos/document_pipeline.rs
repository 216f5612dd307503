use std::rc::Rc;
use yew::prelude::*;
use yew_hooks::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Upload,
    Ocr,
    Extraction,
    Validation,
    Complete,
}

impl Stage {
    pub const ALL: [Stage; 5] = [Stage::Upload, Stage::Ocr, Stage::Extraction, Stage::Validation, Stage::Complete];

    pub fn label(self) -> &'static str {
        match self {
            Stage::Upload => "Upload",
            Stage::Ocr => "OCR",
            Stage::Extraction => "Extraction",
            Stage::Validation => "Validation",
            Stage::Complete => "Complete",
        }
    }

    fn next(self) -> Stage {
        match self {
            Stage::Upload => Stage::Ocr,
            Stage::Ocr => Stage::Extraction,
            Stage::Extraction => Stage::Validation,
            Stage::Validation | Stage::Complete => Stage::Complete,
        }
    }

    fn position(self) -> u32 {
        Stage::ALL.iter().position(|s| *s == self).unwrap_or(0) as u32
    }
}

pub const STEP_PERCENT: u32 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pipeline {
    pub stage: Stage,
    pub progress: u32,
    pub running: bool,
}

pub enum PipelineAction {
    Start,
    Tick,
    Reset,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self { stage: Stage::Upload, progress: 0, running: false }
    }
}

impl Pipeline {
    pub fn start(&mut self) {
        if self.stage == Stage::Complete {
            *self = Self::default();
        }
        self.running = true;
    }

    /// Advances the current stage; a full stage rolls over into the next one.
    pub fn tick(&mut self) {
        if !self.running || self.stage == Stage::Complete {
            return;
        }
        self.progress = (self.progress + STEP_PERCENT).min(100);
        if self.progress == 100 {
            self.stage = self.stage.next();
            self.progress = if self.stage == Stage::Complete { 100 } else { 0 };
            if self.stage == Stage::Complete {
                self.running = false;
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Progress across all working stages, 0 to 100.
    pub fn overall_percent(&self) -> u32 {
        if self.stage == Stage::Complete {
            return 100;
        }
        let working = Stage::ALL.len() as u32 - 1;
        (self.stage.position() * 100 + self.progress) / working
    }

    fn stage_state(&self, stage: Stage) -> &'static str {
        match stage.cmp(&self.stage) {
            std::cmp::Ordering::Less => "done",
            std::cmp::Ordering::Equal if stage == Stage::Complete => "done",
            std::cmp::Ordering::Equal => "active",
            std::cmp::Ordering::Greater => "pending",
        }
    }
}

impl Reducible for Pipeline {
    type Action = PipelineAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut pipeline = *self;
        match action {
            PipelineAction::Start => pipeline.start(),
            PipelineAction::Tick => pipeline.tick(),
            PipelineAction::Reset => pipeline.reset(),
        }
        if pipeline == *self { self } else { Rc::new(pipeline) }
    }
}

const TICK_MS: u32 = 400;

#[function_component(DocumentPipeline)]
pub fn document_pipeline() -> Html {
    let pipeline = use_reducer(Pipeline::default);

    {
        let pipeline = pipeline.clone();
        let millis = if pipeline.running { TICK_MS } else { 0 };
        use_interval(move || pipeline.dispatch(PipelineAction::Tick), millis);
    }

    let on_start = {
        let pipeline = pipeline.clone();
        Callback::from(move |_: MouseEvent| pipeline.dispatch(PipelineAction::Start))
    };
    let on_reset = {
        let pipeline = pipeline.clone();
        Callback::from(move |_: MouseEvent| pipeline.dispatch(PipelineAction::Reset))
    };

    html! {
        <div class="demo-widget document-pipeline">
            <ol class="pipeline-stages">
                { for Stage::ALL.into_iter().map(|stage| html! {
                    <li class={classes!("pipeline-stage", pipeline.stage_state(stage))}>
                        <span>{stage.label()}</span>
                        if stage == pipeline.stage && stage != Stage::Complete {
                            <div class="progress-bar">
                                <div class="progress-fill" style={format!("width: {}%;", pipeline.progress)} />
                            </div>
                        }
                    </li>
                }) }
            </ol>
            <p class="demo-stats">{format!("Overall: {}%", pipeline.overall_percent())}</p>
            <div class="demo-buttons">
                <button class="demo-button" onclick={on_start} disabled={pipeline.running}>
                    { if pipeline.stage == Stage::Complete { "Process another" } else { "Process invoice.pdf" } }
                </button>
                <button class="demo-button secondary" onclick={on_reset}>{"Reset"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_pipeline_does_not_move() {
        let mut p = Pipeline::default();
        p.tick();
        assert_eq!(p, Pipeline::default());
    }

    #[test]
    fn full_stage_rolls_into_next() {
        let mut p = Pipeline::default();
        p.start();
        for _ in 0..(100 / STEP_PERCENT) {
            p.tick();
        }
        assert_eq!(p.stage, Stage::Ocr);
        assert_eq!(p.progress, 0);
    }

    #[test]
    fn runs_to_completion_and_stops() {
        let mut p = Pipeline::default();
        p.start();
        let mut last = 0;
        for _ in 0..100 {
            p.tick();
            assert!(p.overall_percent() >= last);
            last = p.overall_percent();
        }
        assert_eq!(p.stage, Stage::Complete);
        assert!(!p.running);
        assert_eq!(p.overall_percent(), 100);
    }

    #[test]
    fn start_after_complete_begins_again() {
        let mut p = Pipeline { stage: Stage::Complete, progress: 100, running: false };
        p.start();
        assert_eq!(p.stage, Stage::Upload);
        assert!(p.running);
    }

    #[test]
    fn overall_percent_midway() {
        let p = Pipeline { stage: Stage::Extraction, progress: 0, running: true };
        assert_eq!(p.overall_percent(), 50);
    }
}
