use std::rc::Rc;
use yew::prelude::*;
use web_sys::{DragEvent, HtmlInputElement};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnId {
    Todo,
    InProgress,
    Review,
    Done,
}

impl ColumnId {
    pub const ALL: [ColumnId; 4] = [ColumnId::Todo, ColumnId::InProgress, ColumnId::Review, ColumnId::Done];

    pub fn title(self) -> &'static str {
        match self {
            ColumnId::Todo => "To Do",
            ColumnId::InProgress => "In Progress",
            ColumnId::Review => "Review",
            ColumnId::Done => "Done",
        }
    }

    fn index(self) -> usize {
        match self {
            ColumnId::Todo => 0,
            ColumnId::InProgress => 1,
            ColumnId::Review => 2,
            ColumnId::Done => 3,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    pub id: u32,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    columns: [Vec<Card>; 4],
    next_id: u32,
}

pub enum BoardAction {
    Add { column: ColumnId, title: String },
    Move { card_id: u32, to: ColumnId, index: usize },
    Remove { card_id: u32 },
}

impl Board {
    pub fn empty() -> Self {
        Self { columns: Default::default(), next_id: 1 }
    }

    pub fn sample() -> Self {
        let mut board = Self::empty();
        board.add_card(ColumnId::Todo, "Audit IAM roles");
        board.add_card(ColumnId::Todo, "Draft data retention policy");
        board.add_card(ColumnId::InProgress, "Migrate billing DB to managed Postgres");
        board.add_card(ColumnId::Review, "Fraud model v2 evaluation report");
        board.add_card(ColumnId::Done, "Set up CI for the mobile app");
        board
    }

    pub fn cards(&self, column: ColumnId) -> &[Card] {
        &self.columns[column.index()]
    }

    pub fn total(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn locate(&self, card_id: u32) -> Option<(ColumnId, usize)> {
        ColumnId::ALL.into_iter().find_map(|column| {
            self.cards(column)
                .iter()
                .position(|c| c.id == card_id)
                .map(|pos| (column, pos))
        })
    }

    /// Appends a card; blank titles are ignored.
    pub fn add_card(&mut self, column: ColumnId, title: &str) -> Option<u32> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.columns[column.index()].push(Card { id, title: title.to_string() });
        Some(id)
    }

    /// Moves a card so it ends up at `index` of `to`, clamped to the column length.
    pub fn move_card(&mut self, card_id: u32, to: ColumnId, index: usize) -> bool {
        let Some((from, pos)) = self.locate(card_id) else {
            return false;
        };
        let card = self.columns[from.index()].remove(pos);
        let target = &mut self.columns[to.index()];
        let index = index.min(target.len());
        target.insert(index, card);
        true
    }

    pub fn remove_card(&mut self, card_id: u32) -> Option<Card> {
        let (column, pos) = self.locate(card_id)?;
        Some(self.columns[column.index()].remove(pos))
    }
}

impl Reducible for Board {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut board = (*self).clone();
        let changed = match action {
            BoardAction::Add { column, title } => board.add_card(column, &title).is_some(),
            BoardAction::Move { card_id, to, index } => board.move_card(card_id, to, index),
            BoardAction::Remove { card_id } => board.remove_card(card_id).is_some(),
        };
        if changed { Rc::new(board) } else { self }
    }
}

const DRAG_FORMAT: &str = "text/plain";

fn dragged_card(e: &DragEvent) -> Option<u32> {
    e.data_transfer()
        .and_then(|dt| dt.get_data(DRAG_FORMAT).ok())
        .and_then(|raw| raw.parse().ok())
}

#[derive(Properties, PartialEq)]
struct ColumnProps {
    column: ColumnId,
    cards: Vec<Card>,
    dispatch: Callback<BoardAction>,
}

#[function_component(KanbanColumn)]
fn kanban_column(props: &ColumnProps) -> Html {
    let draft = use_state(String::new);
    let column = props.column;

    let on_drag_over = Callback::from(|e: DragEvent| e.prevent_default());

    let on_drop_column = {
        let dispatch = props.dispatch.clone();
        let len = props.cards.len();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            if let Some(card_id) = dragged_card(&e) {
                dispatch.emit(BoardAction::Move { card_id, to: column, index: len });
            }
        })
    };

    let on_draft = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };

    let on_add = {
        let draft = draft.clone();
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatch.emit(BoardAction::Add { column, title: (*draft).clone() });
            draft.set(String::new());
        })
    };

    html! {
        <div class="kanban-column" ondragover={on_drag_over} ondrop={on_drop_column}>
            <h4>{column.title()}<span class="kanban-count">{props.cards.len()}</span></h4>
            { for props.cards.iter().enumerate().map(|(index, card)| {
                let card_id = card.id;
                let on_drag_start = Callback::from(move |e: DragEvent| {
                    if let Some(dt) = e.data_transfer() {
                        let _ = dt.set_data(DRAG_FORMAT, &card_id.to_string());
                    }
                });
                let on_drop_card = {
                    let dispatch = props.dispatch.clone();
                    Callback::from(move |e: DragEvent| {
                        e.prevent_default();
                        e.stop_propagation();
                        if let Some(dragged) = dragged_card(&e) {
                            dispatch.emit(BoardAction::Move { card_id: dragged, to: column, index });
                        }
                    })
                };
                let on_remove = {
                    let dispatch = props.dispatch.clone();
                    Callback::from(move |_: MouseEvent| dispatch.emit(BoardAction::Remove { card_id }))
                };
                html! {
                    <div class="kanban-card" key={card.id} draggable="true" ondragstart={on_drag_start} ondrop={on_drop_card}>
                        <span>{&card.title}</span>
                        <button class="kanban-remove" onclick={on_remove} title="Remove">{"✕"}</button>
                    </div>
                }
            }) }
            <form class="kanban-add" onsubmit={on_add}>
                <input type="text" placeholder="Add a card" value={(*draft).clone()} oninput={on_draft} />
            </form>
        </div>
    }
}

#[function_component(KanbanBoard)]
pub fn kanban_board() -> Html {
    let board = use_reducer(Board::sample);
    let dispatch = {
        let board = board.clone();
        Callback::from(move |action: BoardAction| board.dispatch(action))
    };

    html! {
        <div class="demo-widget kanban-board">
            <p class="demo-hint">{"Drag cards between columns. Nothing is saved; refresh to start over."}</p>
            <div class="kanban-columns">
                { for ColumnId::ALL.into_iter().map(|column| html! {
                    <KanbanColumn
                        column={column}
                        cards={board.cards(column).to_vec()}
                        dispatch={dispatch.clone()}
                    />
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_ids(board: &Board) -> Vec<u32> {
        let mut ids: Vec<u32> = ColumnId::ALL
            .into_iter()
            .flat_map(|c| board.cards(c).iter().map(|card| card.id))
            .collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn blank_titles_are_ignored() {
        let mut board = Board::empty();
        assert_eq!(board.add_card(ColumnId::Todo, "   "), None);
        assert_eq!(board.total(), 0);
    }

    #[test]
    fn move_across_columns_keeps_every_card_once() {
        let mut board = Board::sample();
        let before = all_ids(&board);
        let card = board.cards(ColumnId::Todo)[0].id;

        assert!(board.move_card(card, ColumnId::Done, 0));
        assert_eq!(board.locate(card), Some((ColumnId::Done, 0)));
        assert_eq!(all_ids(&board), before);
    }

    #[test]
    fn move_within_column_reorders() {
        let mut board = Board::empty();
        let a = board.add_card(ColumnId::Todo, "a").unwrap();
        let b = board.add_card(ColumnId::Todo, "b").unwrap();
        let c = board.add_card(ColumnId::Todo, "c").unwrap();

        assert!(board.move_card(a, ColumnId::Todo, 99));
        let order: Vec<u32> = board.cards(ColumnId::Todo).iter().map(|c| c.id).collect();
        assert_eq!(order, vec![b, c, a]);
    }

    #[test]
    fn moving_unknown_card_is_a_no_op() {
        let mut board = Board::sample();
        let before = board.clone();
        assert!(!board.move_card(999, ColumnId::Done, 0));
        assert_eq!(board, before);
    }

    #[test]
    fn remove_drops_exactly_one_card() {
        let mut board = Board::sample();
        let total = board.total();
        let card = board.cards(ColumnId::Review)[0].id;
        assert!(board.remove_card(card).is_some());
        assert_eq!(board.total(), total - 1);
        assert!(board.locate(card).is_none());
        assert!(board.remove_card(card).is_none());
    }

    #[test]
    fn reducer_returns_same_rc_when_nothing_changes() {
        let board = Rc::new(Board::sample());
        let next = board.clone().reduce(BoardAction::Remove { card_id: 12345 });
        assert!(Rc::ptr_eq(&board, &next));
        let next = board.clone().reduce(BoardAction::Add { column: ColumnId::Done, title: "Ship".into() });
        assert_eq!(next.total(), board.total() + 1);
    }

    #[test]
    fn ids_stay_unique_after_removal() {
        let mut board = Board::empty();
        let a = board.add_card(ColumnId::Todo, "a").unwrap();
        board.remove_card(a);
        let b = board.add_card(ColumnId::Todo, "b").unwrap();
        assert_ne!(a, b);
    }
}
