use leptos::*;

/// Runs `test` inside a fresh reactive runtime and disposes it afterwards.
pub fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = test();
    runtime.dispose();
    result
}

/// Server-side render of a view, with resource loading suppressed so no
/// request leaves the test process.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(move || view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}
