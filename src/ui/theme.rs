pub(crate) const BACKGROUND: &str = "#F7F3EE";
pub(crate) const SURFACE: &str = "#FFFFFF";
pub(crate) const TEXT: &str = "#2B2118";
pub(crate) const TEXT_DIM: &str = "#7A6A5C";
pub(crate) const ACCENT: &str = "#6F4E37";
pub(crate) const BORDER: &str = "#E4DAD0";
pub(crate) const INCOME: &str = "#2E8B57";
pub(crate) const EXPENSE: &str = "#9A3B3B";
pub(crate) const SAVINGS: &str = "#355C7D";
pub(crate) const EMPTY_CHART: &str = "#E4DAD0";

pub(crate) fn stylesheet() -> String {
    format!(
        r#"
* {{ box-sizing: border-box; }}
body {{ margin: 0; font-family: system-ui, sans-serif; background: {BACKGROUND}; color: {TEXT}; }}
header {{ display: flex; justify-content: space-between; align-items: center; padding: 1rem 2rem; background: {ACCENT}; color: {SURFACE}; }}
header h1 {{ margin: 0; font-size: 1.4rem; }}
header form {{ display: flex; gap: .5rem; }}
main {{ max-width: 1100px; margin: 0 auto; padding: 1.5rem 2rem 3rem; }}
.save-banner {{ padding: .75rem 1rem; margin-bottom: 1rem; border-radius: 8px; background: {INCOME}; color: {SURFACE}; }}
.stats {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(190px, 1fr)); gap: 1rem; margin-bottom: 1.5rem; }}
.stat-card {{ padding: 1rem; border-radius: 10px; background: {SURFACE}; border: 1px solid {BORDER}; }}
.stat-card .label {{ font-size: .8rem; color: {TEXT_DIM}; text-transform: uppercase; letter-spacing: .04em; }}
.stat-card .value {{ font-size: 1.35rem; font-weight: 600; margin-top: .25rem; }}
.positive {{ color: {INCOME}; }}
.negative {{ color: {EXPENSE}; }}
.overview {{ display: grid; grid-template-columns: 280px 1fr; gap: 1.5rem; margin-bottom: 1.5rem; }}
.chart {{ padding: 1rem; border-radius: 10px; background: {SURFACE}; border: 1px solid {BORDER}; text-align: center; }}
.pie {{ width: 200px; height: 200px; border-radius: 50%; margin: .5rem auto 1rem; }}
.legend {{ list-style: none; padding: 0; margin: 0; text-align: left; }}
.legend li {{ display: flex; justify-content: space-between; padding: .2rem 0; }}
.swatch {{ display: inline-block; width: .8rem; height: .8rem; border-radius: 2px; margin-right: .4rem; }}
.breakdown table {{ width: 100%; border-collapse: collapse; background: {SURFACE}; border-radius: 10px; }}
.breakdown td {{ padding: .45rem .75rem; border-bottom: 1px solid {BORDER}; }}
.breakdown td:last-child {{ text-align: right; font-variant-numeric: tabular-nums; }}
.budget-form {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 1rem; }}
.budget-panel {{ padding: 1rem; border-radius: 10px; background: {SURFACE}; border: 1px solid {BORDER}; }}
.budget-panel h2 {{ margin: 0 0 .75rem; font-size: 1rem; color: {ACCENT}; }}
.budget-panel label {{ display: flex; justify-content: space-between; align-items: center; gap: .5rem; padding: .25rem 0; }}
.budget-panel input {{ width: 9rem; padding: .3rem .4rem; text-align: right; border: 1px solid {BORDER}; border-radius: 6px; }}
.actions {{ grid-column: 1 / -1; text-align: right; }}
button {{ padding: .5rem 1.25rem; border: 0; border-radius: 6px; background: {ACCENT}; color: {SURFACE}; cursor: pointer; }}
header button {{ background: {SURFACE}; color: {ACCENT}; }}
footer {{ color: {TEXT_DIM}; font-size: .8rem; text-align: center; padding-bottom: 2rem; }}
"#
    )
}

/// Submit the month picker on change and tidy money inputs on blur.
pub(crate) const SCRIPT: &str = r##"
document.addEventListener("DOMContentLoaded", () => {
  const picker = document.querySelector("#month-picker");
  if (picker) {
    picker.addEventListener("change", () => picker.form?.submit());
  }
  document.querySelectorAll('input[data-money="true"]').forEach((input) => {
    input.addEventListener("blur", () => {
      const parsed = Number.parseFloat(input.value.replace(/[$,\s]/g, ""));
      input.value = Number.isFinite(parsed) ? parsed.toFixed(2) : "0.00";
    });
  });
});
"##;
