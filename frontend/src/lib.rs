use sauron::{
    html::{attributes::*, *},
    prelude::*,
};
use std::collections::HashSet;
use store::{Action, RandomIds, Storage, Store, Task};
use uuid::Uuid;
use web_sys::{console, window};

mod persistence;

use persistence::LocalStore;

#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Home,
    Tasks,
}

impl Page {
    fn to_path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Tasks => "/tasks",
        }
    }

    fn from_path(path: &str) -> Self {
        match path {
            "/tasks" => Page::Tasks,
            _ => Page::Home, // Default fallback
        }
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    // Navigation
    NavigateTo(Page),

    // Create form
    SetNewTitle(String),
    SetNewDetails(String),
    AddTask,

    // Per-task gestures
    ToggleComplete(Uuid),
    DeleteTask(Uuid),
    StartEdit(Uuid),
    SetEditTitle(String),
    SetEditDetails(String),
    SaveEdit(Uuid),
    CancelEdit,
    ToggleDetails(Uuid),

    // List-wide gestures
    ToggleCompletedSection,
    ClearCompleted,
    ClearAll,
}

pub struct Model {
    current_page: Page,
    store: Store<RandomIds>,
    persistence: LocalStore,
    tasks: Vec<Task>,
    new_title: String,
    new_details: String,
    editing_task: Option<Uuid>,
    edit_title: String,
    edit_details: String,
    open_details: HashSet<Uuid>,
    show_completed: bool,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            current_page: Page::Home,
            store: Store::new(),
            persistence: LocalStore::new(),
            tasks: Vec::new(),
            new_title: String::new(),
            new_details: String::new(),
            editing_task: None,
            edit_title: String::new(),
            edit_details: String::new(),
            open_details: HashSet::new(),
            show_completed: true,
        }
    }
}

impl Application for Model {
    type MSG = Msg;

    fn init(&mut self) -> Cmd<Msg> {
        // Initialize current page from URL
        if let Some(window) = window() {
            if let Ok(pathname) = window.location().pathname() {
                self.current_page = Page::from_path(&pathname);
            }
        }

        self.tasks = self.persistence.load();
        console::log_1(&format!("loaded {} stored tasks", self.tasks.len()).into());
        Cmd::none()
    }

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::NavigateTo(page) => {
                self.current_page = page.clone();

                // Update browser URL without page reload
                if let Some(history) = window().and_then(|w| w.history().ok()) {
                    let _ = history.push_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(page.to_path()),
                    );
                }
            }
            Msg::SetNewTitle(title) => {
                self.new_title = title;
            }
            Msg::SetNewDetails(details) => {
                self.new_details = details;
            }
            Msg::AddTask => {
                if self.new_title.trim().is_empty() {
                    return Cmd::none();
                }
                let action = Action::Create {
                    title: self.new_title.clone(),
                    details: self.new_details.clone(),
                };
                self.new_title.clear();
                self.new_details.clear();
                self.dispatch(action);
            }
            Msg::ToggleComplete(task_id) => {
                if let Some(task) = self.tasks.iter().find(|t| t.id == task_id) {
                    let complete = !task.complete;
                    self.dispatch(Action::Check {
                        id: task_id,
                        complete,
                    });
                }
            }
            Msg::DeleteTask(task_id) => {
                if confirm("Delete this task?") {
                    self.open_details.remove(&task_id);
                    self.dispatch(Action::Delete { id: task_id });
                }
            }
            Msg::StartEdit(task_id) => {
                if let Some(task) = self.tasks.iter().find(|t| t.id == task_id) {
                    self.editing_task = Some(task_id);
                    self.edit_title = task.title.clone();
                    self.edit_details = task.details.clone();
                }
            }
            Msg::SetEditTitle(title) => {
                self.edit_title = title;
            }
            Msg::SetEditDetails(details) => {
                self.edit_details = details;
            }
            Msg::SaveEdit(task_id) => {
                // Guard: only save if we're actually editing this task
                if self.editing_task != Some(task_id) {
                    return Cmd::none();
                }
                self.editing_task = None;
                let title = std::mem::take(&mut self.edit_title);
                let details = std::mem::take(&mut self.edit_details);

                // A blank title is dropped by the store, keeping the old one.
                self.dispatch(Action::EditTitle { id: task_id, title });
                self.dispatch(Action::EditDetails {
                    id: task_id,
                    details,
                });
            }
            Msg::CancelEdit => {
                self.editing_task = None;
                self.edit_title.clear();
                self.edit_details.clear();
            }
            Msg::ToggleDetails(task_id) => {
                if !self.open_details.remove(&task_id) {
                    self.open_details.insert(task_id);
                }
            }
            Msg::ToggleCompletedSection => {
                self.show_completed = !self.show_completed;
            }
            Msg::ClearCompleted => {
                if confirm("Clear all completed tasks?") {
                    self.dispatch(Action::ClearCompleted);
                }
            }
            Msg::ClearAll => {
                if confirm("Clear the whole task list?") {
                    self.open_details.clear();
                    self.editing_task = None;
                    self.dispatch(Action::Clear);
                }
            }
        }
        Cmd::none()
    }

    fn view(&self) -> Node<Msg> {
        div(
            [class("min-h-screen bg-ctp-base text-ctp-text")],
            [
                self.view_header(),
                div(
                    [class("max-w-4xl mx-auto px-6 py-8")],
                    [match self.current_page {
                        Page::Home => self.view_home(),
                        Page::Tasks => self.view_tasks_page(),
                    }],
                ),
            ],
        )
    }
}

impl Model {
    /// Runs one action through the reducer, replaces the current list, and
    /// writes the result out. Persistence failures only cost the latest
    /// change, so they are logged and otherwise ignored.
    fn dispatch(&mut self, action: Action) {
        self.tasks = self.store.apply(&self.tasks, action);
        if let Err(err) = self.persistence.save(&self.tasks) {
            console::log_1(&format!("failed to persist tasks: {}", err).into());
        }
    }

    fn view_header(&self) -> Node<Msg> {
        header([class("bg-ctp-mantle shadow-lg border-b border-ctp-surface0")], [
            div([class("max-w-4xl mx-auto px-6 py-4")], [
                div([class("flex items-center justify-between")], [
                    h1([class("text-2xl font-bold text-ctp-text")], [text("To-Do List")]),
                    nav([class("flex space-x-8")], [
                        self.nav_link("Home", Page::Home),
                        self.nav_link("Tasks", Page::Tasks),
                    ]),
                ]),
            ]),
        ])
    }

    fn nav_link(&self, label: &str, page: Page) -> Node<Msg> {
        let is_active = self.current_page == page;
        a([
            href(page.to_path()),
            on_click(move |event| {
                event.prevent_default();
                Msg::NavigateTo(page.clone())
            }),
            class(&format!(
                "px-3 py-2 rounded-md text-sm font-medium transition-colors duration-200 {}",
                if is_active {
                    "bg-ctp-blue text-ctp-base"
                } else {
                    "text-ctp-subtext0 hover:text-ctp-text hover:bg-ctp-surface0"
                }
            )),
        ], [text(label)])
    }

    fn view_home(&self) -> Node<Msg> {
        div([class("space-y-8")], [
            div([class("bg-ctp-surface0 rounded-lg shadow-lg p-8 border border-ctp-surface1")], [
                h2([class("text-3xl font-bold text-ctp-text mb-4")], [text("What are your tasks for today?")]),
                p([class("text-lg text-ctp-subtext1 mb-6")], [text("Head over to the tasks page to fill out your to-do list. Everything you write stays in this browser and will still be here tomorrow.")]),
                div([class("grid grid-cols-1 md:grid-cols-3 gap-6 mt-8")], [
                    self.stat_card("Total Tasks", &self.tasks.len().to_string(), "📝"),
                    self.stat_card("Active", &self.tasks.iter().filter(|t| !t.complete).count().to_string(), "⏳"),
                    self.stat_card("Completed", &self.tasks.iter().filter(|t| t.complete).count().to_string(), "✅"),
                ]),
            ]),
            div([class("bg-ctp-surface0 rounded-lg shadow-lg p-8 border border-ctp-surface1")], [
                a([
                    href(Page::Tasks.to_path()),
                    on_click(|event| {
                        event.prevent_default();
                        Msg::NavigateTo(Page::Tasks)
                    }),
                    class("bg-ctp-blue hover:bg-ctp-sapphire text-ctp-base font-medium px-6 py-3 rounded-lg transition-colors duration-200 inline-block"),
                ], [text("Go to Tasks")]),
            ]),
        ])
    }

    fn stat_card(&self, card_title: &str, stat: &str, icon: &str) -> Node<Msg> {
        div([class("bg-ctp-surface1 rounded-lg p-6 border border-ctp-surface2")], [
            div([class("flex items-center justify-between")], [
                div([], [
                    p([class("text-sm font-medium text-ctp-subtext0")], [text(card_title)]),
                    p([class("text-2xl font-bold text-ctp-text mt-1")], [text(stat)]),
                ]),
                span([class("text-3xl")], [text(icon)]),
            ]),
        ])
    }

    fn view_tasks_page(&self) -> Node<Msg> {
        div([class("bg-ctp-surface0 rounded-lg shadow-lg p-6 border border-ctp-surface1")], [
            h2([class("text-2xl font-bold text-ctp-text mb-6")], [text("Tasks")]),
            self.view_create_form(),
            self.view_task_list(),
            self.view_footer(),
        ])
    }

    fn view_create_form(&self) -> Node<Msg> {
        div(
            [class("mb-8 p-6 bg-ctp-surface1 rounded-lg border border-ctp-surface2")],
            [
                h3([class("text-xl font-semibold text-ctp-text mb-4 pb-2 border-b border-ctp-surface2")], [text("Add New Task")]),
                div([class("space-y-4")], [
                    input([
                        r#type("text"),
                        placeholder("Task title"),
                        value(&self.new_title),
                        on_input(|event| Msg::SetNewTitle(event.value())),
                        class("w-full px-3 py-2 bg-ctp-surface0 border border-ctp-surface2 rounded-md text-ctp-text placeholder-ctp-subtext0 focus:outline-none focus:ring-2 focus:ring-ctp-blue focus:border-transparent"),
                    ], []),
                    textarea([
                        placeholder("Details (optional)"),
                        value(&self.new_details),
                        on_input(|event| Msg::SetNewDetails(event.value())),
                        class("w-full px-3 py-2 bg-ctp-surface0 border border-ctp-surface2 rounded-md text-ctp-text placeholder-ctp-subtext0 focus:outline-none focus:ring-2 focus:ring-ctp-blue focus:border-transparent h-20 resize-y"),
                    ], []),
                    button([
                        on_click(|_| Msg::AddTask),
                        class("bg-ctp-blue hover:bg-ctp-sapphire text-ctp-base font-medium px-6 py-2 rounded-md transition-colors duration-200"),
                    ], [text("Add Task")]),
                ]),
            ],
        )
    }

    fn view_task_list(&self) -> Node<Msg> {
        let active_tasks: Vec<&Task> = self.tasks.iter().filter(|t| !t.complete).collect();
        let completed_tasks: Vec<&Task> = self.tasks.iter().filter(|t| t.complete).collect();

        div(
            [class("space-y-8")],
            [
                div([], [
                    div([class("flex items-center justify-between mb-4")], [
                        h3([class("text-xl font-semibold text-ctp-text pb-2 border-b border-ctp-surface2")], [text("Active Tasks")]),
                        if !active_tasks.is_empty() {
                            span([class("bg-ctp-blue/20 text-ctp-blue px-2 py-1 rounded-full text-sm font-medium")], [
                                text(&format!("{} active", active_tasks.len()))
                            ])
                        } else {
                            span([], [])
                        }
                    ]),
                    if active_tasks.is_empty() {
                        div([class("text-center py-12")], [
                            div([class("text-ctp-overlay0 text-6xl mb-4")], [text("✨")]),
                            h3([class("text-lg font-medium text-ctp-text mb-2")], [text("All caught up!")]),
                            p([class("text-ctp-subtext0")], [text("No active tasks. Create a new one above to get started!")]),
                        ])
                    } else {
                        div(
                            [class("space-y-4")],
                            active_tasks.iter().map(|task| self.view_task(task)).collect::<Vec<_>>(),
                        )
                    }
                ]),
                if !completed_tasks.is_empty() {
                    div([class("border-t border-ctp-surface1 pt-8")], [
                        div([class("flex items-center justify-between mb-4")], [
                            button([
                                on_click(|_| Msg::ToggleCompletedSection),
                                class("flex items-center space-x-2 text-xl font-semibold text-ctp-text hover:text-ctp-blue transition-colors duration-200"),
                            ], [
                                span([], [text("Completed Tasks")]),
                                span([class("text-sm")], [
                                    if self.show_completed {
                                        text("▼")
                                    } else {
                                        text("▶")
                                    }
                                ])
                            ]),
                            div([class("flex items-center space-x-3")], [
                                span([class("bg-ctp-green/20 text-ctp-green px-2 py-1 rounded-full text-sm font-medium")], [
                                    text(&format!("{} completed", completed_tasks.len()))
                                ]),
                                button([
                                    on_click(|_| Msg::ClearCompleted),
                                    class("bg-ctp-red/20 text-ctp-red hover:bg-ctp-red/30 px-3 py-1 rounded-full text-sm font-medium transition-colors duration-200"),
                                ], [text("Clear Completed")])
                            ])
                        ]),
                        if self.show_completed {
                            div([class("bg-ctp-surface1/50 rounded-lg p-4 border border-ctp-surface2")], [
                                div(
                                    [class("space-y-3")],
                                    completed_tasks.iter().map(|task| self.view_task(task)).collect::<Vec<_>>(),
                                )
                            ])
                        } else {
                            span([], [])
                        }
                    ])
                } else {
                    span([], [])
                }
            ],
        )
    }

    fn view_footer(&self) -> Node<Msg> {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|t| t.complete).count();

        div([class("mt-8 pt-4 border-t border-ctp-surface1 flex items-center justify-between text-sm text-ctp-subtext0")], [
            div([class("flex gap-5")], [
                span([], [text(&format!("{} tasks", total))]),
                span([], [text(&format!("{} active", total - completed))]),
                span([], [text(&format!("{} completed", completed))]),
            ]),
            if total > 0 {
                button([
                    on_click(|_| Msg::ClearAll),
                    class("bg-ctp-red/20 text-ctp-red hover:bg-ctp-red/30 px-3 py-1 rounded-full font-medium transition-colors duration-200"),
                ], [text("Clear All")])
            } else {
                span([], [])
            },
        ])
    }

    fn view_task(&self, task: &Task) -> Node<Msg> {
        let is_editing = self.editing_task == Some(task.id);
        let details_open = self.open_details.contains(&task.id);

        div(
            [key(task.id.to_string()),
            class(&format!(
                "group border rounded-xl p-6 bg-ctp-surface0 shadow-sm transition-all duration-300 hover:shadow-lg {}",
                if task.complete {
                    "border-ctp-green bg-ctp-green/10"
                } else {
                    "border-ctp-surface1 hover:border-ctp-blue hover:-translate-y-0.5"
                }
            ))],
            if is_editing {
                vec![self.view_task_editor(task)]
            } else {
                vec![
                    div([class("flex items-start gap-4")], [
                        div([class("flex-shrink-0 pt-1")], [
                            label([class("relative flex items-center cursor-pointer")], [
                                input([
                                    r#type("checkbox"),
                                    checked(task.complete),
                                    on_click({
                                        let task_id = task.id;
                                        move |_| Msg::ToggleComplete(task_id)
                                    }),
                                    class("sr-only"),
                                ], []),
                                div([class(&format!(
                                    "w-6 h-6 rounded-lg border-2 flex items-center justify-center transition-all duration-200 {}",
                                    if task.complete {
                                        "bg-ctp-green border-ctp-green shadow-sm"
                                    } else {
                                        "border-ctp-surface2 hover:border-ctp-blue hover:bg-ctp-blue/10"
                                    }
                                ))], [
                                    if task.complete {
                                        span([class("text-ctp-base text-sm font-bold")], [text("✓")])
                                    } else {
                                        span([], [])
                                    }
                                ]),
                            ]),
                        ]),
                        div([class("flex-1 min-w-0")], [
                            h3([class(&format!(
                                "text-lg font-semibold mb-1 transition-all duration-200 {}",
                                if task.complete {
                                    "line-through text-ctp-overlay1"
                                } else {
                                    "text-ctp-text"
                                }
                            ))], [text(&task.title)]),
                            if details_open {
                                p([class(&format!(
                                    "text-sm leading-relaxed break-words {}",
                                    if task.complete {
                                        "text-ctp-overlay0 line-through"
                                    } else {
                                        "text-ctp-subtext1"
                                    }
                                ))], [
                                    if task.details.is_empty() {
                                        text("No details")
                                    } else {
                                        text(&task.details)
                                    }
                                ])
                            } else {
                                span([], [])
                            },
                        ]),
                        div([class("flex-shrink-0")], [
                            div([class("flex flex-col gap-2")], [
                                button([
                                    on_click({
                                        let task_id = task.id;
                                        move |_| Msg::ToggleDetails(task_id)
                                    }),
                                    class("inline-flex items-center justify-center w-8 h-8 rounded-lg bg-ctp-yellow/20 text-ctp-yellow hover:bg-ctp-yellow/30 transition-colors duration-200"),
                                    r#type("button"),
                                ], [
                                    span([class("text-sm")], [text("📄")])
                                ]),
                                if !task.complete {
                                    button([
                                        on_click({
                                            let task_id = task.id;
                                            move |_| Msg::StartEdit(task_id)
                                        }),
                                        class("inline-flex items-center justify-center w-8 h-8 rounded-lg bg-ctp-blue/20 text-ctp-blue hover:bg-ctp-blue/30 transition-colors duration-200"),
                                        r#type("button"),
                                    ], [
                                        span([class("text-sm")], [text("✏️")])
                                    ])
                                } else {
                                    span([], [])
                                },
                                button([
                                    on_click({
                                        let task_id = task.id;
                                        move |_| Msg::DeleteTask(task_id)
                                    }),
                                    class(&format!(
                                        "inline-flex items-center justify-center w-8 h-8 rounded-lg transition-colors duration-200 {}",
                                        if task.complete {
                                            "bg-ctp-overlay0/20 text-ctp-overlay0 hover:bg-ctp-red/20 hover:text-ctp-red"
                                        } else {
                                            "bg-ctp-red/20 text-ctp-red hover:bg-ctp-red/30"
                                        }
                                    )),
                                    r#type("button"),
                                ], [
                                    span([class("text-sm")], [text("🗑️")])
                                ]),
                            ]),
                        ]),
                    ]),
                ]
            },
        )
    }

    fn view_task_editor(&self, task: &Task) -> Node<Msg> {
        div([class("space-y-3")], [
            input([
                r#type("text"),
                value(&self.edit_title),
                on_input(|event| Msg::SetEditTitle(event.value())),
                class("w-full px-3 py-2 bg-ctp-surface1 border border-ctp-surface2 rounded-md text-ctp-text focus:outline-none focus:ring-2 focus:ring-ctp-blue focus:border-transparent"),
            ], []),
            textarea([
                value(&self.edit_details),
                on_input(|event| Msg::SetEditDetails(event.value())),
                class("w-full px-3 py-2 bg-ctp-surface1 border border-ctp-surface2 rounded-md text-ctp-text focus:outline-none focus:ring-2 focus:ring-ctp-blue focus:border-transparent h-20 resize-y"),
            ], []),
            div([class("flex gap-2")], [
                button([
                    on_click({
                        let task_id = task.id;
                        move |_| Msg::SaveEdit(task_id)
                    }),
                    class("bg-ctp-green hover:bg-ctp-teal text-ctp-base font-medium px-4 py-2 rounded-md transition-colors duration-200"),
                ], [text("Save")]),
                button([
                    on_click(|_| Msg::CancelEdit),
                    class("bg-ctp-overlay0 hover:bg-ctp-overlay1 text-ctp-text font-medium px-4 py-2 rounded-md transition-colors duration-200"),
                ], [text("Cancel")]),
            ]),
        ])
    }
}

fn confirm(message: &str) -> bool {
    window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    Program::mount_to_body(Model::default());
}
