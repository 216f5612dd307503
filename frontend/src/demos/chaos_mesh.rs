use std::rc::Rc;
use yew::prelude::*;
use yew_hooks::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Health {
    Healthy,
    Degraded,
    Down,
    Recovering,
}

impl Health {
    fn class(self) -> &'static str {
        match self {
            Health::Healthy => "healthy",
            Health::Degraded => "degraded",
            Health::Down => "down",
            Health::Recovering => "recovering",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Health::Healthy => "Healthy",
            Health::Degraded => "Degraded",
            Health::Down => "Down",
            Health::Recovering => "Recovering",
        }
    }

    fn is_impaired(self) -> bool {
        matches!(self, Health::Down | Health::Recovering)
    }
}

pub struct MeshNode {
    pub name: &'static str,
    pub depends_on: &'static [usize],
}

/// Indices in `depends_on` point into this table.
pub const MESH: &[MeshNode] = &[
    MeshNode { name: "gateway", depends_on: &[1, 2] },
    MeshNode { name: "auth", depends_on: &[4] },
    MeshNode { name: "orders", depends_on: &[3, 4, 5] },
    MeshNode { name: "inventory", depends_on: &[4] },
    MeshNode { name: "postgres", depends_on: &[] },
    MeshNode { name: "queue", depends_on: &[] },
];

const LOG_LIMIT: usize = 8;

#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    health: Vec<Health>,
    log: Vec<String>,
}

pub enum MeshAction {
    Inject(usize),
    Tick,
    Reset,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            health: vec![Health::Healthy; MESH.len()],
            log: Vec::new(),
        }
    }

    pub fn health(&self, node: usize) -> Health {
        self.health[node]
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn is_all_healthy(&self) -> bool {
        self.health.iter().all(|h| *h == Health::Healthy)
    }

    fn record(&mut self, line: String) {
        self.log.push(line);
        if self.log.len() > LOG_LIMIT {
            self.log.remove(0);
        }
    }

    /// Takes `node` down and degrades whatever calls it directly.
    pub fn inject_fault(&mut self, node: usize) {
        if node >= MESH.len() {
            return;
        }
        self.health[node] = Health::Down;
        self.record(format!("Fault injected: {} is down", MESH[node].name));
        for (i, dependent) in MESH.iter().enumerate() {
            if dependent.depends_on.contains(&node) && self.health[i] == Health::Healthy {
                self.health[i] = Health::Degraded;
                self.record(format!("{} degraded (depends on {})", dependent.name, MESH[node].name));
            }
        }
    }

    /// One recovery step, evaluated against the state before the tick.
    pub fn tick(&mut self) {
        let before = self.health.clone();
        for (i, node) in MESH.iter().enumerate() {
            let next = match before[i] {
                Health::Down => Health::Recovering,
                Health::Recovering => Health::Healthy,
                Health::Degraded if node.depends_on.iter().any(|d| before[*d].is_impaired()) => {
                    Health::Degraded
                }
                Health::Degraded => Health::Healthy,
                Health::Healthy => Health::Healthy,
            };
            if next != before[i] {
                self.health[i] = next;
                self.record(format!("{} is {}", node.name, next.label().to_lowercase()));
            }
        }
    }

    pub fn reset(&mut self) {
        self.health.fill(Health::Healthy);
        self.log.clear();
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducible for Mesh {
    type Action = MeshAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if matches!(action, MeshAction::Tick) && self.is_all_healthy() {
            return self;
        }
        let mut mesh = (*self).clone();
        match action {
            MeshAction::Inject(node) => mesh.inject_fault(node),
            MeshAction::Tick => mesh.tick(),
            MeshAction::Reset => mesh.reset(),
        }
        Rc::new(mesh)
    }
}

const TICK_MS: u32 = 1500;

#[function_component(ChaosMesh)]
pub fn chaos_mesh() -> Html {
    let mesh = use_reducer(Mesh::new);

    {
        let mesh = mesh.clone();
        let millis = if mesh.is_all_healthy() { 0 } else { TICK_MS };
        use_interval(move || mesh.dispatch(MeshAction::Tick), millis);
    }

    let on_reset = {
        let mesh = mesh.clone();
        Callback::from(move |_: MouseEvent| mesh.dispatch(MeshAction::Reset))
    };

    html! {
        <div class="demo-widget chaos-mesh">
            <p class="demo-hint">{"Click a service to inject a fault and watch the mesh recover."}</p>
            <div class="mesh-grid">
                { for MESH.iter().enumerate().map(|(i, node)| {
                    let health = mesh.health(i);
                    let onclick = {
                        let mesh = mesh.clone();
                        Callback::from(move |_: MouseEvent| mesh.dispatch(MeshAction::Inject(i)))
                    };
                    let deps = node.depends_on.iter().map(|d| MESH[*d].name).collect::<Vec<_>>().join(", ");
                    html! {
                        <button class={classes!("mesh-node", health.class())} {onclick}>
                            <strong>{node.name}</strong>
                            <span class="mesh-status">{health.label()}</span>
                            if !deps.is_empty() {
                                <span class="mesh-deps">{format!("→ {}", deps)}</span>
                            }
                        </button>
                    }
                }) }
            </div>
            <div class="mesh-log">
                if mesh.log().is_empty() {
                    <p class="demo-hint">{"All services healthy."}</p>
                } else {
                    <ul>
                        { for mesh.log().iter().map(|line| html! { <li>{line}</li> }) }
                    </ul>
                }
            </div>
            <button class="demo-button secondary" onclick={on_reset}>{"Reset"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSTGRES: usize = 4;

    #[test]
    fn fault_degrades_direct_dependents_only() {
        let mut mesh = Mesh::new();
        mesh.inject_fault(POSTGRES);
        assert_eq!(mesh.health(POSTGRES), Health::Down);
        assert_eq!(mesh.health(1), Health::Degraded);
        assert_eq!(mesh.health(2), Health::Degraded);
        assert_eq!(mesh.health(3), Health::Degraded);
        // gateway only calls auth and orders
        assert_eq!(mesh.health(0), Health::Healthy);
        assert_eq!(mesh.health(5), Health::Healthy);
    }

    #[test]
    fn down_recovers_one_step_per_tick() {
        let mut mesh = Mesh::new();
        mesh.inject_fault(POSTGRES);
        mesh.tick();
        assert_eq!(mesh.health(POSTGRES), Health::Recovering);
        assert_eq!(mesh.health(1), Health::Degraded);
        mesh.tick();
        assert_eq!(mesh.health(POSTGRES), Health::Healthy);
        assert_eq!(mesh.health(1), Health::Degraded);
        mesh.tick();
        assert!(mesh.is_all_healthy());
    }

    #[test]
    fn any_fault_sequence_eventually_heals() {
        let mut mesh = Mesh::new();
        for node in [0, 4, 2, 5, 4] {
            mesh.inject_fault(node);
            mesh.tick();
        }
        for _ in 0..10 {
            mesh.tick();
        }
        assert!(mesh.is_all_healthy());
    }

    #[test]
    fn reset_clears_health_and_log() {
        let mut mesh = Mesh::new();
        mesh.inject_fault(2);
        assert!(!mesh.log().is_empty());
        mesh.reset();
        assert!(mesh.is_all_healthy());
        assert!(mesh.log().is_empty());
    }

    #[test]
    fn log_is_bounded() {
        let mut mesh = Mesh::new();
        for _ in 0..20 {
            mesh.inject_fault(POSTGRES);
        }
        assert!(mesh.log().len() <= LOG_LIMIT);
    }

    #[test]
    fn out_of_range_fault_is_ignored() {
        let mut mesh = Mesh::new();
        mesh.inject_fault(MESH.len());
        assert!(mesh.is_all_healthy());
    }

    #[test]
    fn mesh_dependencies_point_inside_the_table() {
        for node in MESH {
            assert!(node.depends_on.iter().all(|d| *d < MESH.len()));
        }
    }
}
