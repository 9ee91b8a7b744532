use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::controls::selection::{
    ControlEvent, ControlRequest, ControlSource, Selection, selection_snapshot,
};
use crate::engine::interaction::controller::InteractionController;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Outgoing message buffers, flushed to the host page once per frame.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the host page without expecting a response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    /// Notifications queued since the last flush.
    #[cfg(test)]
    pub fn pending_notifications(&self) -> usize {
        self.outgoing_notifications.len()
    }

    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }
}

pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    send_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            // Cheap filter; full parsing happens on the Bevy side.
            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Some(window) = window() {
        if let Err(e) =
            window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
        {
            error!("Failed to register message listener: {:?}", e);
        }
    }

    // Ownership moves to JS; the listener lives for the page's lifetime.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Raw message strings pushed by the wasm `message` listener.
#[derive(Resource)]
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

/// What a parsed RPC method asks the viewer to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RpcAction {
    Control(ControlRequest),
    GetSelection,
    GetFps,
}

/// Map a method name and its params to an action, validating preset names.
pub fn parse_rpc_method(method: &str, params: &serde_json::Value) -> Result<RpcAction, RpcError> {
    #[derive(Deserialize)]
    struct MaterialParams {
        material: String,
    }
    #[derive(Deserialize)]
    struct TimeParams {
        time: String,
    }
    #[derive(Deserialize)]
    struct ViewParams {
        view: String,
    }
    #[derive(Deserialize)]
    struct AutoRotateParams {
        enabled: bool,
    }

    let request = match method {
        "select_wall_material" => {
            let p: MaterialParams = parse_params(params, "Expected 'material' parameter")?;
            ControlRequest::WallMaterial(p.material.parse().map_err(invalid_preset)?)
        }
        "select_roof_material" => {
            let p: MaterialParams = parse_params(params, "Expected 'material' parameter")?;
            ControlRequest::RoofMaterial(p.material.parse().map_err(invalid_preset)?)
        }
        "select_time_of_day" => {
            let p: TimeParams = parse_params(params, "Expected 'time' parameter")?;
            ControlRequest::TimeOfDay(p.time.parse().map_err(invalid_preset)?)
        }
        "select_view" => {
            let p: ViewParams = parse_params(params, "Expected 'view' parameter")?;
            ControlRequest::View(p.view.parse().map_err(invalid_preset)?)
        }
        "set_auto_rotate" => {
            let p: AutoRotateParams = parse_params(params, "Expected boolean 'enabled' parameter")?;
            ControlRequest::SetAutoRotate(p.enabled)
        }
        "get_selection" => return Ok(RpcAction::GetSelection),
        "get_fps" => return Ok(RpcAction::GetFps),
        _ => return Err(RpcError::method_not_found(method)),
    };

    Ok(RpcAction::Control(request))
}

fn parse_params<T: DeserializeOwned>(
    params: &serde_json::Value,
    message: &str,
) -> Result<T, RpcError> {
    serde_json::from_value(params.clone()).map_err(|_| RpcError::invalid_params(message))
}

fn invalid_preset(error: crate::error::UnknownPreset) -> RpcError {
    RpcError::invalid_params(&error.to_string())
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    diagnostics: Option<Res<DiagnosticsStore>>,
    selection: Res<Selection>,
    controller: Res<InteractionController>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut control_events: EventWriter<ControlEvent>,
) {
    for event in events.read() {
        let request = match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => request,
            Err(parse_error) => {
                warn!("Dropping malformed RPC message: {}", parse_error);
                continue;
            }
        };
        debug!("Processing RPC method: {}", request.method);

        let outcome = parse_rpc_method(&request.method, &request.params).map(|action| {
            match action {
                RpcAction::Control(control) => {
                    control_events.write(ControlEvent {
                        request: control,
                        source: ControlSource::Rpc,
                    });
                    serde_json::json!({ "success": true })
                }
                RpcAction::GetSelection => selection_snapshot(&selection, controller.auto_rotate),
                RpcAction::GetFps => serde_json::json!({
                    "fps": current_fps(diagnostics.as_deref())
                }),
            }
        });

        if let Err(error) = &outcome {
            warn!("RPC {} failed: {}", request.method, error.message);
        }

        // Notifications (no id) never get a response.
        let Some(id) = request.id else {
            continue;
        };
        let (result, error) = match outcome {
            Ok(value) => (Some(value), None),
            Err(error) => (None, Some(error)),
        };
        rpc_interface.queue_response(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result,
            error,
            id: Some(id),
        });
    }
}

pub fn current_fps(diagnostics: Option<&DiagnosticsStore>) -> f32 {
    diagnostics
        .and_then(|store| store.get(&FrameTimeDiagnosticsPlugin::FPS))
        .and_then(|fps_diagnostic| fps_diagnostic.smoothed())
        .unwrap_or(0.0) as f32
}

/// Send queued notifications, then responses, to the host page.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
    }
}

impl RpcError {
    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: "Method not found".to_string(),
            data: Some(serde_json::json!({ "method": method })),
        }
    }

    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }
}
