//! JSON-RPC 2.0 bridge between the viewer and its host page.
//!
//! When the viewer runs in an iframe, the embedding page drives the same
//! controls as the on-screen panel and receives state updates back, all over
//! `window.postMessage`.
//!
//! ```text
//! Host page (parent window)  <──postMessage──>  Viewer (iframe)
//!        │                                            │
//!        ├─ Request (with ID) ──────────────────────> │
//!        │                                            ├─ ControlEvent / query
//!        │ <────────────────────── Response (with ID) ┤
//!        │                                            │
//!        │ <───────────────────── Notification (no ID) ┤
//! ```
//!
//! ## Methods
//!
//! - `select_wall_material` `{ "material": "stone" }`
//! - `select_roof_material` `{ "material": "tiles" }`
//! - `select_time_of_day` `{ "time": "sunset" }`
//! - `select_view` `{ "view": "top" }`
//! - `set_auto_rotate` `{ "enabled": false }`
//! - `get_selection`
//! - `get_fps`
//!
//! Control methods are applied even when sent as notifications (no `id`);
//! only requests with an `id` get a response.
//!
//! ## Notifications
//!
//! - `selection_changed`: wall, roof, time of day and auto-rotate state
//! - `loading_progress`: `{ "percent": 42.0 }`
//! - `loading_complete`
//! - `fps_update`: every 0.5 s
//!
//! ## Error codes
//!
//! - `-32601`: Method not found
//! - `-32602`: Invalid params, including unknown preset names
//!
//! Native builds register the same systems but never receive messages, and
//! outgoing messages are dropped.

/// Message types, the RPC resource and plugin, and method dispatch.
pub mod web_rpc;
