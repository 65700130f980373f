//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js`. They are evaluated as
//! globals (no ES modules) and exposed via `window.*`. This module embeds
//! those scripts, serializes chart specs, and calls the globals.

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");
static SCATTER_CHART_JS: &str = include_str!("../assets/js/scatter-chart.js");

/// Global functions promoted to `window` once the scripts are evaluated.
const CHART_GLOBALS: [&str; 6] = [
    "renderPieChart",
    "renderScatterChart",
    "destroyChart",
    "initTooltip",
    "showTooltip",
    "hideTooltip",
];

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SLR JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The scripts are stored on `window` and evaluated at global scope by
/// indirect eval once D3 is available, then each chart function is
/// promoted to `window.*` explicitly.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, PIE_CHART_JS, SCATTER_CHART_JS].join("\n");

    let store_js = format!("window.__slrChartScripts = {};", js_string(&all_js));
    let _ = js_sys::eval(&store_js);

    let promote: String = CHART_GLOBALS
        .iter()
        .map(|name| {
            format!(
                "if (typeof {name} !== 'undefined') window.{name} = {name};\n"
            )
        })
        .collect();

    let init_js = format!(
        r#"
        (function() {{
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__slrChartScripts);
                    delete window.__slrChartScripts;
                    {promote}
                    window.__slrChartsReady = true;
                    console.log('SLR charts initialized');
                }}
            }}, 100);
        }})();
        "#
    );
    let _ = js_sys::eval(&init_js);
}

/// Call `window.<function>(container_id, chart_json)` once the chart scripts
/// are ready and the container exists in the DOM.
fn render_when_ready(function: &str, container_id: &str, chart_json: &str) {
    let id = js_string(container_id);
    let data = js_string(chart_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__slrChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.{function}({id}, {data});
                    }} catch(e) {{ console.error('[SLR] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the success pie chart from a serialized `PieChart`.
pub fn render_pie_chart(container_id: &str, chart_json: &str) {
    render_when_ready("renderPieChart", container_id, chart_json);
}

/// Render the payload/outcome scatter chart from a serialized `ScatterChart`.
pub fn render_scatter_chart(container_id: &str, chart_json: &str) {
    render_when_ready("renderScatterChart", container_id, chart_json);
}

fn destroy_chart_js(container_id: &str) -> String {
    let id = js_string(container_id);
    format!(
        "if (typeof window.destroyChart === 'function') {{ window.destroyChart({id}); }} \
         else {{ var el = document.getElementById({id}); if (el) el.innerHTML = ''; }}"
    )
}

/// Tear down the chart in the given container and hide its tooltip.
pub fn destroy_chart(container_id: &str) {
    call_js(&destroy_chart_js(container_id));
}
