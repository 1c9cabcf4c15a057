//! Self-contained HTML page around the heatmap SVG.
//!
//! The page carries a `#tooltip` element and a small script: hovering a
//! `.cell` copies its `data-tooltip` content into the tooltip, places it next
//! to the pointer and fades it in; leaving a cell makes it fully transparent.

use heatmap_common::HeatmapResult;

use crate::heatmap::{description, title, Heatmap, TooltipMode};

/// Tooltip opacity while a cell is hovered.
pub const TOOLTIP_OPACITY: f64 = 0.9;

const STYLE: &str = r#"
      body { font-family: sans-serif; text-align: center; }
      #tooltip {
        position: absolute;
        opacity: 0;
        pointer-events: none;
        padding: 6px 10px;
        font-size: 12px;
        background: rgba(0, 0, 0, 0.8);
        color: #fff;
        border-radius: 4px;
      }
      .cell:hover { stroke: #000; stroke-width: 1px; }
"#;

/// Script attaching the pointer handlers. `{opacity}` is substituted.
const SCRIPT: &str = r##"
      (function () {
        var tooltip = document.getElementById("tooltip");
        document.querySelectorAll("#heatmap .cell").forEach(function (cell) {
          cell.addEventListener("mouseover", function (event) {
            tooltip.setAttribute("data-year", cell.getAttribute("data-year"));
            tooltip.innerHTML = cell.getAttribute("data-tooltip");
            tooltip.style.left = (event.pageX + 10) + "px";
            tooltip.style.top = (event.pageY - 40) + "px";
            tooltip.style.opacity = {opacity};
          });
          cell.addEventListener("mouseout", function () {
            tooltip.style.opacity = 0;
          });
        });
      })();
"##;

/// Render the full HTML page for a heatmap.
pub fn render_html(heatmap: &Heatmap<'_>) -> HeatmapResult<String> {
    let svg = heatmap.render_svg(TooltipMode::DataAttribute)?;
    let script = SCRIPT.replace("{opacity}", &TOOLTIP_OPACITY.to_string());

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>{style}</style>
  </head>
  <body>
    <h1 id="title">{title}</h1>
    <h3 id="description">{description}</h3>
{svg}
    <div id="tooltip"></div>
    <script>{script}</script>
  </body>
</html>
"#,
        title = title(),
        description = description(heatmap.dataset()),
        style = STYLE,
        svg = svg,
        script = script,
    ))
}
