//! Client-side entry point: logging first, then mount the app.

use circle_graph_canvas::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
