//! Runs typed commands against a viewer.

use super::command::{Command, RawCommand, Rgba, Tool};
use crate::model::NodeId;
use crate::scene::{PropertyService, SceneGraph};
use crate::session::Session;
use tracing::{info, warn};

const SEARCH_HIGHLIGHT_LIMIT: usize = 5;

/// The viewer operations commands may trigger.
pub trait ViewerActions {
    fn isolate(&mut self, ids: &[NodeId]);
    fn hide(&mut self, ids: &[NodeId]);
    fn show_all(&mut self);
    fn clear_colors(&mut self);
    fn set_color(&mut self, id: NodeId, color: Rgba);
    fn fit_to_view(&mut self, ids: &[NodeId]);
    /// Returns `false` if the tool could not be loaded.
    fn activate_tool(&mut self, tool: Tool) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeStatus {
    Done,
    NoMatch,
    MissingInput,
    Failed,
}

/// What happened when one command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub command: String,
    pub status: OutcomeStatus,
    pub message: String,
    pub ids: Vec<NodeId>,
}

impl CommandOutcome {
    fn new(command: &str, status: OutcomeStatus, message: impl Into<String>) -> Self {
        Self {
            command: command.to_string(),
            status,
            message: message.into(),
            ids: Vec::new(),
        }
    }

    fn with_ids(mut self, ids: Vec<NodeId>) -> Self {
        self.ids = ids;
        self
    }
}

fn no_match(name: &str, query: &str) -> CommandOutcome {
    CommandOutcome::new(
        name,
        OutcomeStatus::NoMatch,
        format!("No element found for \"{query}\"."),
    )
}

fn missing_criterion(name: &str) -> CommandOutcome {
    CommandOutcome::new(name, OutcomeStatus::MissingInput, "Missing search criterion.")
}

/// Resolves `query`, applies `act` to the hits and reports the outcome.
fn act_on_matches<G, S>(
    session: &Session<'_, G, S>,
    name: &str,
    query: Option<&str>,
    act: impl FnOnce(&[NodeId]),
    message: impl FnOnce(usize, &str) -> String,
) -> CommandOutcome
where
    G: SceneGraph + ?Sized,
    S: PropertyService,
{
    let Some(query) = query else {
        return missing_criterion(name);
    };
    let ids = session.resolve(query);
    if ids.is_empty() {
        return no_match(name, query);
    }
    act(&ids);
    CommandOutcome::new(name, OutcomeStatus::Done, message(ids.len(), query)).with_ids(ids)
}

/// Validates and runs every command in order.
///
/// Unknown or malformed commands produce a failed outcome; the remaining
/// commands still run.
pub async fn execute<G, S, V>(
    session: &Session<'_, G, S>,
    viewer: &mut V,
    commands: Vec<RawCommand>,
) -> Vec<CommandOutcome>
where
    G: SceneGraph + ?Sized,
    S: PropertyService,
    V: ViewerActions,
{
    let mut outcomes = Vec::with_capacity(commands.len());

    for raw in commands {
        let name = raw.name.clone();
        let outcome = match Command::try_from(raw) {
            Ok(command) => run(session, viewer, command).await,
            Err(err) => {
                warn!(command = %name, error = %err, "command rejected");
                CommandOutcome::new(&name, OutcomeStatus::Failed, err.to_string())
            }
        };
        info!(command = %outcome.command, status = ?outcome.status, "command executed");
        outcomes.push(outcome);
    }

    outcomes
}

async fn run<G, S, V>(session: &Session<'_, G, S>, viewer: &mut V, command: Command) -> CommandOutcome
where
    G: SceneGraph + ?Sized,
    S: PropertyService,
    V: ViewerActions,
{
    let name = command.name();

    match command {
        Command::Isolate(params) => {
            act_on_matches(session, name, params.criterion(), |ids| viewer.isolate(ids), |n, q| {
                format!("{n} element(s) isolated for \"{q}\".")
            })
        }
        Command::Hide(params) => {
            act_on_matches(session, name, params.criterion(), |ids| viewer.hide(ids), |n, q| {
                format!("{n} element(s) hidden for \"{q}\".")
            })
        }
        Command::ZoomTo(params) => {
            act_on_matches(session, name, params.criterion(), |ids| viewer.fit_to_view(ids), |n, q| {
                format!("Zoomed to {n} element(s) for \"{q}\".")
            })
        }
        Command::Search(params) => {
            let Some(query) = params.criterion() else {
                return missing_criterion(name);
            };
            let ids = session.resolve(query);
            if (1..=SEARCH_HIGHLIGHT_LIMIT).contains(&ids.len()) {
                viewer.clear_colors();
                for &id in &ids {
                    viewer.set_color(id, Rgba::HIGHLIGHT);
                }
            }
            CommandOutcome::new(
                name,
                OutcomeStatus::Done,
                format!("Search \"{query}\": {} result(s).", ids.len()),
            )
            .with_ids(ids)
        }
        Command::Count(params) => match params.criterion() {
            Some(query) => {
                let ids = session.resolve(query);
                CommandOutcome::new(
                    name,
                    OutcomeStatus::Done,
                    format!("{} element(s) found for \"{query}\".", ids.len()),
                )
                .with_ids(ids)
            }
            None => CommandOutcome::new(
                name,
                OutcomeStatus::Done,
                format!("Total elements in the model: {}", session.node_ids().len()),
            ),
        },
        Command::ChangeColor(params) => {
            let color = Rgba::from_hex(&params.color);
            act_on_matches(
                session,
                name,
                params.criterion(),
                |ids| {
                    for &id in ids {
                        viewer.set_color(id, color);
                    }
                },
                |n, q| format!("Color changed for {n} element(s) for \"{q}\"."),
            )
        }
        Command::ShowAll => {
            viewer.show_all();
            CommandOutcome::new(name, OutcomeStatus::Done, "All elements are visible.")
        }
        Command::ModelInfo => CommandOutcome::new(
            name,
            OutcomeStatus::Done,
            format!(
                "Model information:\n• Total elements: {}\n• Classified elements: {}",
                session.node_ids().len(),
                session.records().len()
            ),
        ),
        Command::Properties(params) => {
            let Some(id) = params.element_id else {
                return CommandOutcome::new(name, OutcomeStatus::MissingInput, "Missing element id.");
            };
            match session.context().properties.fetch(id).await {
                Ok(bag) => CommandOutcome::new(
                    name,
                    OutcomeStatus::Done,
                    format!("Properties of element {id}:\n{}", bag.describe()),
                )
                .with_ids(vec![id]),
                Err(err) => {
                    warn!(node = id, error = %err, "property fetch failed");
                    CommandOutcome::new(
                        name,
                        OutcomeStatus::Failed,
                        format!("Could not fetch the properties of element {id}."),
                    )
                }
            }
        }
        Command::Activate(tool) => {
            let label = match tool {
                Tool::Measure => "Measure",
                Tool::Section => "Section",
            };
            if viewer.activate_tool(tool) {
                CommandOutcome::new(name, OutcomeStatus::Done, format!("{label} tool activated."))
            } else {
                CommandOutcome::new(
                    name,
                    OutcomeStatus::Failed,
                    format!("{label} tool could not be loaded."),
                )
            }
        }
    }
}

/// One call received by a [`RecordingViewer`].
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerAction {
    Isolate(Vec<NodeId>),
    Hide(Vec<NodeId>),
    ShowAll,
    ClearColors,
    SetColor(NodeId, Rgba),
    FitToView(Vec<NodeId>),
    ActivateTool(Tool),
}

/// Headless viewer that records every call it receives.
#[derive(Debug, Default)]
pub struct RecordingViewer {
    pub actions: Vec<ViewerAction>,
}

impl ViewerActions for RecordingViewer {
    fn isolate(&mut self, ids: &[NodeId]) {
        self.actions.push(ViewerAction::Isolate(ids.to_vec()));
    }

    fn hide(&mut self, ids: &[NodeId]) {
        self.actions.push(ViewerAction::Hide(ids.to_vec()));
    }

    fn show_all(&mut self) {
        self.actions.push(ViewerAction::ShowAll);
    }

    fn clear_colors(&mut self) {
        self.actions.push(ViewerAction::ClearColors);
    }

    fn set_color(&mut self, id: NodeId, color: Rgba) {
        self.actions.push(ViewerAction::SetColor(id, color));
    }

    fn fit_to_view(&mut self, ids: &[NodeId]) {
        self.actions.push(ViewerAction::FitToView(ids.to_vec()));
    }

    fn activate_tool(&mut self, tool: Tool) -> bool {
        self.actions.push(ViewerAction::ActivateTool(tool));
        true
    }
}
