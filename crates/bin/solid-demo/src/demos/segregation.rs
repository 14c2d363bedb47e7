//! Interface segregation: each button declares only the gestures it handles.

use std::sync::Arc;

use solid_adapter_buttons::{BasicButton, FullButton};
use solid_app::ports::{Console, LongTap, SingleTap};

pub const TITLE: &str = "Interface segregation principle (ISP)";

pub fn run(console: &Arc<dyn Console>) {
    super::header(console.as_ref(), TITLE);

    let full = FullButton::new(Arc::clone(console));
    full.long_tap();

    let basic = BasicButton::new(Arc::clone(console));
    basic.single_tap();
}
