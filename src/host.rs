//! Host-facing message envelope and reference host.
//!
//! The engine returns structured data; everything a player reads on
//! screen is formatted here. The wire shapes are the envelope the game
//! UI speaks: a request is `{msg, body}`, a response is
//! `{msg, body: {heading, message, newLine}}`.

use crate::games::strand::{Coord, NodeOutcome, Player, Segment};
use crate::session::GameSession;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Footer shown when the idle timer fires.
pub const ASLEEP_FOOTER: &str = "Are you asleep?";
/// Footer for a rejected start selection.
pub const INVALID_START_FOOTER: &str = "You must start on either end of the path!";
/// Footer for a rejected extension.
pub const INVALID_END_FOOTER: &str = "Invalid move. Try again.";
/// Heading once the game is over.
pub const GAME_OVER_HEADING: &str = "Game Over";

/// Formats the turn heading for a player.
pub fn player_heading(player: Player) -> String {
    format!("Player {}", player.number())
}

/// Formats the awaiting-move footer for a player.
pub fn awaiting_message(player: Player) -> String {
    format!("Awaiting {}'s Move", player_heading(player))
}

/// Formats the winner footer.
pub fn game_over_footer(winner: Player) -> String {
    format!("Player {} wins!", winner.number())
}

/// A request from the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "msg", content = "body")]
pub enum HostRequest {
    /// Start a fresh game.
    #[serde(rename = "INITIALIZE")]
    Initialize,
    /// A lattice node was activated.
    #[serde(rename = "NODE_CLICKED")]
    NodeClicked(Coord),
}

/// Response message tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ResponseMsg {
    /// The game was (re)initialized.
    #[serde(rename = "INITIALIZE")]
    Initialize,
    /// Idle-timer text refresh.
    #[serde(rename = "UPDATE_TEXT")]
    UpdateText,
    /// The start selection was accepted.
    #[serde(rename = "VALID_START_NODE")]
    ValidStartNode,
    /// The start selection was rejected.
    #[serde(rename = "INVALID_START_NODE")]
    InvalidStartNode,
    /// The extension was accepted.
    #[serde(rename = "VALID_END_NODE")]
    ValidEndNode,
    /// The extension was rejected.
    #[serde(rename = "INVALID_END_NODE")]
    InvalidEndNode,
    /// The final segment was committed and the game is over.
    #[serde(rename = "GAME_OVER_MSG")]
    GameOver,
}

/// The newly drawn line, for the UI to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NewLine {
    /// The path end the segment was drawn from.
    pub start: Coord,
    /// The new path end.
    pub end: Coord,
}

impl From<&Segment> for NewLine {
    fn from(segment: &Segment) -> Self {
        Self {
            start: segment.start(),
            end: segment.end(),
        }
    }
}

/// Response body: heading, footer text, and the new line if one was
/// drawn. Absent parts are serialized as nulls, as the UI expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResponseBody {
    /// Turn or game-over heading.
    pub heading: Option<String>,
    /// Footer message.
    pub message: Option<String>,
    /// The committed segment's endpoints.
    #[serde(rename = "newLine")]
    pub new_line: Option<NewLine>,
}

/// A response to the host UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HostResponse {
    /// Message tag.
    pub msg: ResponseMsg,
    /// Message body.
    pub body: ResponseBody,
}

impl HostResponse {
    fn new(msg: ResponseMsg, heading: Option<String>, message: Option<String>) -> Self {
        Self {
            msg,
            body: ResponseBody {
                heading,
                message,
                new_line: None,
            },
        }
    }

    fn with_line(mut self, segment: &Segment) -> Self {
        self.body.new_line = Some(NewLine::from(segment));
        self
    }
}

/// Reference host for a single game: translates engine outcomes into the
/// wire envelope and owns every UI string.
///
/// Transport, rendering and the idle timer itself stay with the caller;
/// [`GameHost::idle_response`] only builds the text for a timer the
/// caller runs.
#[derive(Debug)]
pub struct GameHost {
    session: GameSession,
    size: usize,
}

impl GameHost {
    /// Creates a host with a fresh game on a `size` × `size` lattice.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            session: GameSession::new("local".to_string(), size),
            size,
        }
    }

    /// The underlying session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Handles one request from the UI.
    ///
    /// Returns `None` when the engine emits nothing, which happens for
    /// node clicks after the game has completed.
    #[instrument(skip(self))]
    pub fn handle(&mut self, request: HostRequest) -> Option<HostResponse> {
        match request {
            HostRequest::Initialize => Some(self.initialize()),
            HostRequest::NodeClicked(node) => self.node_clicked(node),
        }
    }

    /// Starts a fresh game and announces the first player.
    #[instrument(skip(self))]
    pub fn initialize(&mut self) -> HostResponse {
        info!("Initializing game");
        self.session = GameSession::new("local".to_string(), self.size);
        let player = self.session.current_player().unwrap_or(Player::One);
        HostResponse::new(
            ResponseMsg::Initialize,
            Some(player_heading(player)),
            Some(awaiting_message(player)),
        )
    }

    /// Forwards a node click to the engine and formats the outcome.
    #[instrument(skip(self))]
    pub fn node_clicked(&mut self, node: Coord) -> Option<HostResponse> {
        let outcome = self.session.node_activated(node)?;
        let heading = self.session.current_player().map(player_heading);

        let response = match outcome {
            NodeOutcome::SelectionAccepted { .. } => {
                HostResponse::new(ResponseMsg::ValidStartNode, heading, None)
            }
            NodeOutcome::SelectionRejected { reason } => {
                debug!(%reason, "Start selection rejected");
                HostResponse::new(
                    ResponseMsg::InvalidStartNode,
                    heading,
                    Some(INVALID_START_FOOTER.to_string()),
                )
            }
            NodeOutcome::ExtensionAccepted { segment } => {
                let message = self.session.current_player().map(awaiting_message);
                HostResponse::new(ResponseMsg::ValidEndNode, heading, message)
                    .with_line(&segment)
            }
            NodeOutcome::ExtensionRejected { reason } => {
                debug!(%reason, "Extension rejected");
                HostResponse::new(
                    ResponseMsg::InvalidEndNode,
                    heading,
                    Some(INVALID_END_FOOTER.to_string()),
                )
            }
            NodeOutcome::GameOver { segment, winner } => HostResponse::new(
                ResponseMsg::GameOver,
                Some(GAME_OVER_HEADING.to_string()),
                Some(game_over_footer(winner)),
            )
            .with_line(&segment),
        };

        Some(response)
    }

    /// Builds the idle-timer text, or `None` once the game is over.
    ///
    /// Purely informational: never mutates engine state.
    pub fn idle_response(&self) -> Option<HostResponse> {
        let player = self.session.current_player()?;
        Some(HostResponse::new(
            ResponseMsg::UpdateText,
            Some(player_heading(player)),
            Some(ASLEEP_FOOTER.to_string()),
        ))
    }
}
