//! Script template sources.
//!
//! Each template renders one JavaScript function or class body. Values
//! spliced in with `{{ ... }}` are pre-escaped JavaScript literals (see
//! [`js_literal`](super::js_literal)), except `prefix`, which is always a
//! generated CSS identifier.

pub(super) const DATE_FORMATTER: &str = r#"function (params) {
    const v = params.value;
    if (v === null || v === undefined || v === '') {
        return '';
    }
    const date = new Date(v);
    if (isNaN(date.getTime())) {
        return '';
    }
    // Date-only ISO strings parse as UTC midnight.
    const utc = typeof v === 'string' && /^\d{4}-\d{2}-\d{2}$/.test(v);
    const year = utc ? date.getUTCFullYear() : date.getFullYear();
    const month = String((utc ? date.getUTCMonth() : date.getMonth()) + 1).padStart(2, '0');
    const day = String(utc ? date.getUTCDate() : date.getDate()).padStart(2, '0');
    return `${year}-${month}-${day}`;
}"#;

pub(super) const STATUS_CSS: &str = r#".{{ prefix }}-badge {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 4px 10px;
    border-radius: 12px;
    font-weight: 600;
    font-size: 12px;
    line-height: 1.2;
}
.{{ prefix }}-dot {
    position: relative;
    width: 8px;
    height: 8px;
    flex-shrink: 0;
}
.{{ prefix }}-dot::before {
    content: '';
    position: absolute;
    width: 8px;
    height: 8px;
    border-radius: 50%;
    top: 0;
    left: 0;
}
.{{ prefix }}-dot::after {
    content: '';
    position: absolute;
    top: -3px;
    left: -3px;
    width: 14px;
    height: 14px;
    border-radius: 50%;
    opacity: 0;
    animation: {{ prefix }}-pulse 2s ease-out infinite;
}
@keyframes {{ prefix }}-pulse {
    0% { opacity: .6; transform: scale(.7); }
    100% { opacity: 0; transform: scale(2); }
}
{%- for state in states %}
.{{ prefix }}-{{ state.suffix }} {
    background: {{ state.background }};
    color: {{ state.color }};
}
.{{ prefix }}-{{ state.suffix }} .{{ prefix }}-dot::before {
    background: {{ state.color }};
}
.{{ prefix }}-{{ state.suffix }} .{{ prefix }}-dot::after {
    border: 1.5px solid {{ state.color }};
}
{%- endfor %}
"#;

pub(super) const STATUS_RENDERER: &str = r#"class StatusRenderer {
    init(params) {
        const map = {{ lookup }};
        const v = params.value;
        this.eGui = document.createElement('span');
        if (v === null || v === undefined || v === '') {
            return;
        }
        const key = String(v);
        const entry = map[key];
        if (!entry) {
{%- if lenient %}
            this.eGui.textContent = key;
{%- endif %}
            return;
        }
        const injected = window.__easygrid_css__ = window.__easygrid_css__ || {};
        if (!injected[{{ guard }}]) {
            const style = document.createElement('style');
            style.textContent = {{ css }};
            document.head.appendChild(style);
            injected[{{ guard }}] = true;
        }
        const classes = {{ classes }};
        this.eGui.className = '{{ prefix }}-badge';
        if (classes[key] !== undefined) {
            this.eGui.className += ' {{ prefix }}-' + classes[key];
        }
        const text = document.createElement('span');
        text.textContent = entry.label;
        const dot = document.createElement('div');
        dot.className = '{{ prefix }}-dot';
        this.eGui.appendChild(text);
        this.eGui.appendChild(dot);
    }

    getGui() {
        return this.eGui;
    }
}"#;

pub(super) const STATUS_FORMATTER: &str = r#"function (params) {
    const map = {{ lookup }};
    const v = params.value;
    if (v === null || v === undefined || v === '') {
        return '';
    }
    const entry = map[String(v)];
{%- if lenient %}
    return entry ? entry.label : String(v);
{%- else %}
    return entry ? entry.label : '';
{%- endif %}
}"#;

pub(super) const BOOL_COERCE: &str = r#"    const TRUTHY = {{ truthy }};
    const FALSY = {{ falsy }};
    const field = params.colDef ? params.colDef.field : undefined;
    const raw = (params.data && field !== undefined && field !== null) ? params.data[field] : params.value;
    let state = null;
    if (raw === true || raw === 1) {
        state = true;
    } else if (raw === false || raw === 0) {
        state = false;
    } else if (typeof raw === 'string') {
        const text = raw.trim().toLowerCase();
        if (TRUTHY.indexOf(text) !== -1) {
            state = true;
        } else if (FALSY.indexOf(text) !== -1) {
            state = false;
        }
    }"#;

pub(super) const BOOL_PILL_RENDERER: &str = r#"function (params) {
{% include "bool_coerce" %}
    if (state === null) {
        return '';
    }
    const pill = document.createElement('span');
    pill.textContent = state ? {{ true_label }} : {{ false_label }};
    pill.style.cssText = 'display:inline-flex;align-items:center;padding:2px 10px;border-radius:999px;font-size:12px;font-weight:600;line-height:1.4;';
    pill.style.color = state ? {{ true_color }} : {{ false_color }};
    pill.style.background = state ? {{ true_background }} : {{ false_background }};
    return pill;
}"#;

pub(super) const BOOL_PILL_FORMATTER: &str = r#"function (params) {
{% include "bool_coerce" %}
    if (state === null) {
        return '';
    }
    return state ? {{ true_label }} : {{ false_label }};
}"#;

pub(super) const DIVERGING_BAR_RENDERER: &str = r#"function (params) {
    const v = params.value;
    if (v === null || v === undefined || v === '') {
        return '';
    }
    const num = Number(v);
    if (!isFinite(num)) {
        return '';
    }
    const max = {{ max }};
    const fill = Math.min(Math.abs(num) / max, 0.5);
    const color = num < 0 ? {{ negative_color }} : {{ positive_color }};
    const wrap = document.createElement('div');
    wrap.style.cssText = 'display:flex;align-items:center;gap:8px;width:100%;';
    const track = document.createElement('div');
    track.style.cssText = 'position:relative;flex:1;height:10px;border-radius:5px;background:{{ track_css }};overflow:hidden;';
    const bar = document.createElement('div');
    bar.style.cssText = 'position:absolute;top:0;bottom:0;';
    bar.style.width = (fill * 100) + '%';
    bar.style.background = color;
    if (num < 0) {
        bar.style.right = '50%';
    } else {
        bar.style.left = '50%';
    }
    const axis = document.createElement('div');
    axis.style.cssText = 'position:absolute;left:50%;top:0;bottom:0;width:1px;background:#9ca3af;';
    track.appendChild(bar);
    track.appendChild(axis);
    wrap.appendChild(track);
{%- if show_value %}
    const label = document.createElement('span');
    label.textContent = String(num);
    label.style.cssText = 'min-width:3em;text-align:right;font-variant-numeric:tabular-nums;';
    label.style.color = color;
    wrap.appendChild(label);
{%- endif %}
    return wrap;
}"#;

pub(super) const PROGRESS_RING_RENDERER: &str = r#"function (params) {
    const v = params.value;
    if (v === null || v === undefined || v === '') {
        return '';
    }
    const num = Number(v);
    if (!isFinite(num)) {
        return '';
    }
    const pct = Math.max(0, Math.min(100, num));
    let color = {{ critical }};
    if (pct >= {{ high_at }}) {
        color = {{ high }};
    } else if (pct >= {{ medium_at }}) {
        color = {{ medium }};
    } else if (pct >= {{ low_at }}) {
        color = {{ low }};
    }
    const size = {{ size }};
    const stroke = 3;
    const radius = (size - stroke) / 2;
    const circumference = 2 * Math.PI * radius;
    const ns = 'http://www.w3.org/2000/svg';
    const svg = document.createElementNS(ns, 'svg');
    svg.setAttribute('width', size);
    svg.setAttribute('height', size);
    svg.setAttribute('viewBox', '0 0 ' + size + ' ' + size);
    const ring = (stroke_color) => {
        const c = document.createElementNS(ns, 'circle');
        c.setAttribute('cx', size / 2);
        c.setAttribute('cy', size / 2);
        c.setAttribute('r', radius);
        c.setAttribute('fill', 'none');
        c.setAttribute('stroke', stroke_color);
        c.setAttribute('stroke-width', stroke);
        return c;
    };
    const progress = ring(color);
    progress.setAttribute('stroke-linecap', 'round');
    progress.setAttribute('stroke-dasharray', circumference);
    progress.setAttribute('stroke-dashoffset', circumference * (1 - pct / 100));
    progress.setAttribute('transform', 'rotate(-90 ' + size / 2 + ' ' + size / 2 + ')');
    svg.appendChild(ring({{ track_color }}));
    svg.appendChild(progress);
    const wrap = document.createElement('div');
    wrap.style.cssText = 'display:flex;align-items:center;gap:6px;';
    const label = document.createElement('span');
    label.textContent = Math.round(pct) + '%';
    label.style.cssText = 'font-size:12px;font-weight:600;font-variant-numeric:tabular-nums;';
    label.style.color = color;
    wrap.appendChild(svg);
    wrap.appendChild(label);
    return wrap;
}"#;

pub(super) const ICON_STATUS_RENDERER: &str = r#"function (params) {
    const v = params.value;
    if (v === null || v === undefined || v === '') {
        return '';
    }
    const key = String(v);
    const map = {{ lookup }};
    const entry = map[key] || { label: key, color: {{ fallback_color }}, svg: {{ fallback_svg }} };
    const caption = (entry.caption === undefined || entry.caption === null) ? key : entry.caption;
    const wrap = document.createElement('div');
    wrap.style.cssText = 'display:flex;align-items:center;gap:8px;line-height:1.15;';
    const icon = document.createElement('span');
    icon.style.cssText = 'display:inline-flex;flex-shrink:0;';
    icon.innerHTML = entry.svg;
    const text = document.createElement('div');
    text.style.cssText = 'display:flex;flex-direction:column;min-width:0;';
    const title = document.createElement('span');
    title.textContent = entry.label;
    title.style.cssText = 'font-weight:600;overflow:hidden;text-overflow:ellipsis;';
    title.style.color = entry.color;
    const sub = document.createElement('span');
    sub.textContent = caption;
    sub.style.cssText = 'font-size:11px;color:#6b7280;overflow:hidden;text-overflow:ellipsis;';
    text.appendChild(title);
    text.appendChild(sub);
    wrap.appendChild(icon);
    wrap.appendChild(text);
    return wrap;
}"#;

/// Every template, registered under its name.
pub(super) const ALL: &[(&str, &str)] = &[
    ("date_formatter", DATE_FORMATTER),
    ("status_css", STATUS_CSS),
    ("status_renderer", STATUS_RENDERER),
    ("status_formatter", STATUS_FORMATTER),
    ("bool_coerce", BOOL_COERCE),
    ("bool_pill_renderer", BOOL_PILL_RENDERER),
    ("bool_pill_formatter", BOOL_PILL_FORMATTER),
    ("diverging_bar_renderer", DIVERGING_BAR_RENDERER),
    ("progress_ring_renderer", PROGRESS_RING_RENDERER),
    ("icon_status_renderer", ICON_STATUS_RENDERER),
];
