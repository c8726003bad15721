use crate::models::RankedEntry;

pub fn render_login(locations: &[String]) -> String {
    let options: String = locations
        .iter()
        .map(|loc| {
            let loc = escape_html(loc);
            format!(r#"<option value="{loc}">{loc}</option>"#)
        })
        .collect();
    layout("Login", &LOGIN_HTML.replace("{{OPTIONS}}", &options))
}

pub fn render_input(location: &str) -> String {
    layout(
        "Data Entry",
        &INPUT_HTML.replace("{{LOCATION}}", &escape_html(location)),
    )
}

pub fn render_output(ranked: &[RankedEntry]) -> String {
    let table = if ranked.is_empty() {
        EMPTY_HTML.to_string()
    } else {
        let rows: String = ranked.iter().map(render_row).collect();
        TABLE_HTML.replace("{{ROWS}}", &rows)
    };
    let disabled = if ranked.is_empty() { "disabled" } else { "" };
    layout(
        "Rank List",
        &OUTPUT_HTML
            .replace("{{CLEAR_DISABLED}}", disabled)
            .replace("{{TABLE}}", &table),
    )
}

fn render_row(ranked: &RankedEntry) -> String {
    let entry = &ranked.entry;
    let index = ranked.rank - 1;
    let class = if ranked.is_grand_winner() {
        "winner"
    } else if index % 2 == 0 {
        "shade-blue"
    } else {
        "shade-red"
    };
    let badge = if ranked.is_grand_winner() {
        r#"<span class="crown">&#x1F451; GRAND WINNER</span>"#
    } else {
        ""
    };
    format!(
        r#"<tr class="{class}"><td class="rank">{rank}{badge}</td><td>{name}</td><td>{guest}</td><td class="sales">{sales}</td><td>{report}</td></tr>"#,
        rank = ranked.rank,
        name = escape_html(&entry.name),
        guest = entry.guest,
        sales = group_thousands(entry.sales),
        report = group_thousands(entry.report_sales),
    )
}

fn layout(title: &str, body: &str) -> String {
    LAYOUT_HTML
        .replace("{{TITLE}}", title)
        .replace("{{BODY}}", body)
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

const LAYOUT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>
    :root {
      --red: #dc2626;
      --blue: #2563eb;
      --ink: #1f2937;
      --muted: #6b7280;
      --card: #ffffff;
      --shadow: 0 18px 40px rgba(37, 99, 235, 0.15);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: #f3f4f6;
      color: var(--ink);
      font-family: "Segoe UI", "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    body.login {
      display: grid;
      place-items: center;
      background: linear-gradient(135deg, var(--red), #ef4444 45%, #1d4ed8);
    }

    header {
      display: flex;
      flex-wrap: wrap;
      justify-content: space-between;
      align-items: center;
      gap: 12px;
      max-width: 960px;
      margin: 0 auto 24px;
    }

    h1 {
      margin: 0;
      font-size: 1.8rem;
    }

    h1 small {
      font-size: 0.9rem;
      color: var(--muted);
      font-weight: 500;
    }

    .card {
      max-width: 720px;
      margin: 0 auto;
      background: var(--card);
      border-radius: 16px;
      box-shadow: var(--shadow);
      padding: 28px;
      border-top: 4px solid var(--red);
    }

    .card.wide {
      max-width: 960px;
      padding: 0;
      overflow-x: auto;
    }

    .login-card {
      width: min(420px, 100%);
      background: rgba(0, 0, 0, 0.3);
      border-radius: 16px;
      padding: 32px;
      color: white;
    }

    label {
      display: block;
      font-size: 0.85rem;
      font-weight: 600;
      margin-bottom: 6px;
    }

    input, select {
      width: 100%;
      padding: 10px 12px;
      border: 1px solid #93c5fd;
      border-radius: 8px;
      font-size: 1rem;
    }

    .field {
      position: relative;
      margin-bottom: 18px;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 18px;
    }

    .suggestions {
      position: absolute;
      z-index: 10;
      width: 100%;
      margin: 4px 0 0;
      padding: 0;
      list-style: none;
      background: white;
      border: 1px solid #d1d5db;
      border-radius: 8px;
    }

    .suggestions li {
      padding: 8px 14px;
      cursor: pointer;
    }

    .suggestions li:hover {
      background: #fee2e2;
    }

    form.inline {
      display: inline;
    }

    button {
      border: none;
      border-radius: 8px;
      padding: 10px 16px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      color: white;
      background: var(--blue);
    }

    button.danger {
      background: var(--red);
    }

    button.plain {
      background: #9ca3af;
    }

    button.primary {
      width: 100%;
      padding: 14px;
      background: linear-gradient(90deg, var(--red), var(--blue));
    }

    button:disabled {
      opacity: 0.5;
      cursor: not-allowed;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      font-size: 0.95rem;
    }

    th {
      background: var(--blue);
      color: white;
      text-transform: uppercase;
      font-size: 0.75rem;
      text-align: left;
      padding: 12px 20px;
    }

    td {
      padding: 14px 20px;
      border-bottom: 1px solid #e5e7eb;
    }

    tr.shade-blue {
      background: #eff6ff;
    }

    tr.shade-red {
      background: #fef2f2;
    }

    tr.winner {
      background: #1f2937;
      color: white;
      font-size: 1.1rem;
      font-weight: 700;
    }

    tr.winner .sales {
      color: #4ade80;
    }

    .sales {
      font-weight: 700;
      color: #15803d;
    }

    .crown {
      display: block;
      color: #fde047;
      font-size: 0.8rem;
      letter-spacing: 0.08em;
    }

    .empty {
      text-align: center;
      padding: 48px;
      color: var(--muted);
    }
  </style>
</head>
{{BODY}}
</html>
"#;

const LOGIN_HTML: &str = r#"<body class="login">
  <div class="login-card">
    <h1>Login</h1>
    <form method="post" action="/login">
      <div class="field">
        <label for="location">Select Your Location</label>
        <select id="location" name="location">{{OPTIONS}}</select>
      </div>
      <button type="submit" class="primary">Submit</button>
    </form>
  </div>
</body>"#;

const INPUT_HTML: &str = r#"<body>
  <header>
    <h1>Data Entry <small>({{LOCATION}})</small></h1>
    <div>
      <form class="inline" method="post" action="/nav/output"><button type="submit">View Ranks</button></form>
      <form class="inline" method="post" action="/logout"><button type="submit" class="plain">Logout</button></form>
    </div>
  </header>
  <div class="card">
    <form method="post" action="/entries">
      <div class="field">
        <label for="name">Name</label>
        <input id="name" name="name" type="text" autocomplete="off" required />
        <ul id="suggestions" class="suggestions" hidden></ul>
      </div>
      <div class="grid">
        <div class="field">
          <label for="guest">Guest</label>
          <input id="guest" name="guest" type="number" min="0" required />
        </div>
        <div class="field">
          <label for="sales">Sales</label>
          <input id="sales" name="sales" type="number" required />
        </div>
        <div class="field">
          <label for="report-sales">Report Sales</label>
          <input id="report-sales" name="report_sales" type="number" required />
        </div>
      </div>
      <button type="submit" class="primary">Save / Next</button>
    </form>
  </div>
  <script>
    const nameEl = document.getElementById('name');
    const listEl = document.getElementById('suggestions');

    const hide = () => {
      listEl.hidden = true;
      listEl.innerHTML = '';
    };

    nameEl.addEventListener('input', async () => {
      const query = nameEl.value;
      if (!query) {
        hide();
        return;
      }
      const res = await fetch(`/api/suggestions?name=${encodeURIComponent(query)}`);
      if (!res.ok) {
        hide();
        return;
      }
      const names = await res.json();
      listEl.innerHTML = '';
      names.forEach((name) => {
        const item = document.createElement('li');
        item.textContent = name;
        item.addEventListener('mousedown', () => {
          nameEl.value = name;
          hide();
        });
        listEl.appendChild(item);
      });
      listEl.hidden = names.length === 0;
    });

    nameEl.addEventListener('blur', () => setTimeout(hide, 150));
  </script>
</body>"#;

const OUTPUT_HTML: &str = r#"<body>
  <header>
    <h1>Rank List</h1>
    <div>
      <form class="inline" method="post" action="/nav/input"><button type="submit">Add New Entry</button></form>
      <form class="inline" method="post" action="/entries/clear"
        onsubmit="return confirm('Are you sure you want to delete all entries? This action is permanent and cannot be undone.');">
        <button type="submit" class="danger" {{CLEAR_DISABLED}}>Clear Data</button>
      </form>
      <form class="inline" method="post" action="/logout"><button type="submit" class="plain">Logout</button></form>
    </div>
  </header>
  <div class="card wide">{{TABLE}}</div>
</body>"#;

const TABLE_HTML: &str = r#"<table>
      <thead>
        <tr><th>Rank</th><th>Name</th><th>Guest</th><th>Sales</th><th>Report Sales</th></tr>
      </thead>
      <tbody>{{ROWS}}</tbody>
    </table>"#;

const EMPTY_HTML: &str = r#"<div class="empty">
      <p><strong>No data available.</strong></p>
      <p>Click "Add New Entry" to get started.</p>
    </div>"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Entry, EntryId};

    fn ranked(name: &str, sales: i64, rank: usize) -> RankedEntry {
        RankedEntry {
            entry: Entry {
                id: EntryId::from(name),
                name: name.to_string(),
                guest: 2,
                sales,
                report_sales: sales,
                location: "Thanjavur".to_string(),
            },
            rank,
        }
    }

    #[test]
    fn groups_digits_like_a_ledger() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(-1234567), "-1,234,567");
    }

    #[test]
    fn output_marks_only_the_winner() {
        let html = render_output(&[ranked("Top", 5000, 1), ranked("<b>Next</b>", 40, 2)]);
        assert_eq!(html.matches("GRAND WINNER").count(), 1);
        assert!(html.contains("5,000"));
        assert!(html.contains("&lt;b&gt;Next&lt;/b&gt;"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn rows_alternate_by_position_after_the_winner() {
        let html = render_output(&[
            ranked("One", 30, 1),
            ranked("Two", 20, 2),
            ranked("Three", 10, 3),
        ]);
        let winner = html.find(r#"<tr class="winner">"#).unwrap();
        let red = html.find(r#"<tr class="shade-red">"#).unwrap();
        let blue = html.find(r#"<tr class="shade-blue">"#).unwrap();
        assert!(winner < red && red < blue);
        assert!(html[red..].contains("Two"));
    }

    #[test]
    fn empty_output_disables_clear() {
        let html = render_output(&[]);
        assert!(html.contains("No data available."));
        assert!(html.contains("disabled>Clear Data"));
    }

    #[test]
    fn login_lists_locations() {
        let html = render_login(&["Thanjavur".to_string(), "Mannargudi".to_string()]);
        assert!(html.contains(r#"<option value="Mannargudi">Mannargudi</option>"#));
    }
}
