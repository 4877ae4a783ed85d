#![cfg(target_arch = "wasm32")]

use signal_chart::application::ChartService;
use signal_chart::config::ChartConfig;
use signal_chart::domain::errors::ErrorKind;
use signal_chart::infrastructure::rendering::{Surface, WebCanvasSurface};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_canvas(id: &str, width: &str, height: &str) -> web_sys::HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    canvas.set_attribute("style", &format!("display:block;width:{};height:{}", width, height)).unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn missing_canvas_is_a_precondition_failure() {
    let err = WebCanvasSurface::attach("no-such-canvas", 2.0).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::PreconditionFailed);
}

#[wasm_bindgen_test]
fn backing_store_follows_device_pixel_ratio() {
    let canvas = mount_canvas("chart-dpr", "400px", "300px");
    let surface = WebCanvasSurface::attach("chart-dpr", 2.0).unwrap();

    assert_eq!(surface.logical_size(), (400.0, 300.0));
    assert_eq!((canvas.width(), canvas.height()), (800, 600));
}

#[wasm_bindgen_test]
fn renders_into_the_page() {
    mount_canvas("chart-render", "400px", "400px");
    let mut surface = WebCanvasSurface::attach("chart-render", 1.0).unwrap();
    let mut service = ChartService::seeded(ChartConfig::default(), 42).unwrap();

    let summary = service.refresh(&mut surface).unwrap();
    assert_eq!(summary.bar_count, 50);
}

#[wasm_bindgen_test]
fn hidden_canvas_is_not_painted() {
    mount_canvas("chart-hidden", "0px", "0px");
    let mut surface = WebCanvasSurface::attach("chart-hidden", 1.0).unwrap();
    let mut service = ChartService::seeded(ChartConfig::default(), 42).unwrap();

    let err = service.refresh(&mut surface).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PreconditionFailed);
}
