pub const STYLE: &str = r#"
:root {
    --bg: #0e1117;
    --sidebar: #262730;
    --card: #161b22;
    --border: #30363d;
    --text: #fafafa;
    --dim: #8b949e;
    --accent: #ff4b4b;
    --error: #f85149;
}
* { box-sizing: border-box; }
body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Noto Sans', Helvetica, Arial, sans-serif;
    background: var(--bg);
    color: var(--text);
}
.layout { display: flex; min-height: 100vh; }
aside {
    width: 300px;
    flex-shrink: 0;
    background: var(--sidebar);
    padding: 2rem 1rem;
}
aside select { width: 100%; min-height: 8rem; margin-bottom: 1rem; }
main { flex-grow: 1; padding: 2rem 3rem; max-width: 1100px; }
h1 { font-size: 2.4rem; margin-top: 0; }
section { margin-bottom: 3rem; }
label { display: block; color: var(--dim); margin: 0.5rem 0 0.25rem; }
select { background: var(--card); color: var(--text); border: 1px solid var(--border); padding: 0.4rem; }
.tabs button {
    background: none;
    border: none;
    border-bottom: 2px solid transparent;
    color: var(--dim);
    padding: 0.5rem 1rem;
    cursor: pointer;
}
.tabs button.active { color: var(--accent); border-bottom-color: var(--accent); }
.tab-panel { display: none; }
.tab-panel.active { display: block; }
.chart { min-height: 450px; }
.view-error {
    border: 1px solid var(--error);
    color: var(--error);
    padding: 1rem;
    border-radius: 4px;
}
table { border-collapse: collapse; width: 100%; font-size: 0.85rem; margin-top: 1rem; }
th, td { border: 1px solid var(--border); padding: 0.3rem 0.5rem; text-align: left; }
th { background: var(--card); }
footer { color: var(--dim); font-size: 0.75rem; }
"#;

/// Widget handlers: every widget refetches only the view it drives.
pub const SCRIPT: &str = r#"
const PLOT_CONFIG = { responsive: true };

function drawChart(element) {
    const figure = JSON.parse(element.dataset.figure);
    Plotly.react(element, figure.data, figure.layout, PLOT_CONFIG);
}

function showError(container, message) {
    container.innerHTML = '';
    const box = document.createElement('div');
    box.className = 'view-error';
    box.textContent = message;
    container.appendChild(box);
}

async function fetchView(path, params) {
    const response = await fetch(path + '?' + params.toString());
    const body = await response.json();
    if (!response.ok) {
        throw new Error(body.error || ('HTTP ' + response.status));
    }
    return body;
}

function syncLocation() {
    const params = new URLSearchParams();
    for (const name of ['genre', 'setting']) {
        const select = document.getElementById(name);
        if (select) params.set(name, select.value);
    }
    for (const name of ['genres', 'settings']) {
        const select = document.getElementById(name);
        if (!select) continue;
        for (const option of select.selectedOptions) {
            params.append(name, option.value);
        }
    }
    history.replaceState(null, '', '?' + params.toString());
}

async function onRatingFilterChange() {
    const params = new URLSearchParams({
        genre: document.getElementById('genre').value,
        setting: document.getElementById('setting').value,
    });
    const container = document.getElementById('rating-scatter-view');
    try {
        const view = await fetchView('/v1/views/rating-distribution', params);
        container.innerHTML = '<div id="rating-scatter" class="chart"></div>';
        const chart = document.getElementById('rating-scatter');
        chart.dataset.figure = JSON.stringify(view.figure);
        drawChart(chart);
    } catch (err) {
        showError(container, err.message);
    }
    syncLocation();
}

function renderTable(container, table) {
    container.innerHTML = '';
    if (table === null) {
        return;
    }
    const heading = document.createElement('h3');
    heading.textContent = 'Filtered Data';
    container.appendChild(heading);
    const element = document.createElement('table');
    const head = element.createTHead().insertRow();
    for (const column of table.columns) {
        const th = document.createElement('th');
        th.textContent = column;
        head.appendChild(th);
    }
    const body = element.createTBody();
    for (const row of table.rows) {
        const tr = body.insertRow();
        for (const cell of row) {
            tr.insertCell().textContent = cell;
        }
    }
    container.appendChild(element);
}

async function onMultiFilterChange() {
    const params = new URLSearchParams();
    for (const name of ['genres', 'settings']) {
        const select = document.getElementById(name);
        if (!select) continue;
        for (const option of select.selectedOptions) {
            params.append(name, option.value);
        }
    }
    const container = document.getElementById('filtered-titles-view');
    try {
        const view = await fetchView('/v1/views/filtered-titles', params);
        renderTable(container, view.table);
    } catch (err) {
        showError(container, err.message);
    }
    syncLocation();
}

function selectTab(button) {
    const group = button.closest('.tab-group');
    for (const other of group.querySelectorAll('.tabs button')) {
        other.classList.toggle('active', other === button);
    }
    for (const panel of group.querySelectorAll('.tab-panel')) {
        const active = panel.id === button.dataset.panel;
        panel.classList.toggle('active', active);
        if (active) {
            for (const chart of panel.querySelectorAll('.chart')) {
                Plotly.Plots.resize(chart);
            }
        }
    }
}

document.addEventListener('DOMContentLoaded', () => {
    for (const chart of document.querySelectorAll('.chart[data-figure]')) {
        drawChart(chart);
    }
    for (const button of document.querySelectorAll('.tabs button')) {
        button.addEventListener('click', () => selectTab(button));
    }
    for (const id of ['genre', 'setting']) {
        const select = document.getElementById(id);
        if (select) select.addEventListener('change', onRatingFilterChange);
    }
    for (const id of ['genres', 'settings']) {
        const select = document.getElementById(id);
        if (select) select.addEventListener('change', onMultiFilterChange);
    }
    for (const button of document.querySelectorAll('.apply-filters')) {
        button.hidden = true;
    }
});
"#;
