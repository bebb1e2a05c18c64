use crate::models::GameStatsSummary;

pub fn render_index(summary: &GameStatsSummary) -> String {
    let rows: String = summary
        .top_games
        .iter()
        .map(|game| {
            format!(
                "<li><span class=\"rank\">#{}</span><img src=\"{}\" alt=\"\" /><div><p class=\"name\">{}</p><p class=\"players\">{} players</p></div></li>",
                game.rank,
                escape_html(&game.header_image),
                escape_html(&game.name),
                game.concurrent_in_game
            )
        })
        .collect();

    INDEX_HTML
        .replace("{{TOP_ROWS}}", &rows)
        .replace("{{TOTAL_ALL}}", &summary.total_players_all.to_string())
        .replace("{{TOTAL_TOP}}", &summary.total_players_top.to_string())
        .replace("{{TOP_SHARE}}", &format!("{:.2}", summary.top_share_percent))
        .replace("{{REST_SHARE}}", &format!("{:.2}", summary.rest_share_percent))
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Steam Game Stats</title>
  <style>
    :root {
      --bg-1: #1b2838;
      --bg-2: #2a475e;
      --ink: #c7d5e0;
      --accent: #66c0f4;
      --card: rgba(23, 32, 44, 0.92);
      --shadow: 0 18px 48px rgba(0, 0, 0, 0.45);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(160deg, var(--bg-1), var(--bg-2));
      color: var(--ink);
      font-family: 'Segoe UI', 'Trebuchet MS', sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(920px, 100%);
      background: var(--card);
      border-radius: 18px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      margin: 0;
      font-size: 1.8rem;
      color: white;
    }

    .search {
      position: relative;
    }

    .search input {
      background: rgba(255, 255, 255, 0.08);
      border: 1px solid rgba(102, 192, 244, 0.35);
      border-radius: 10px;
      color: var(--ink);
      padding: 10px 14px;
      width: 260px;
      font-size: 0.95rem;
    }

    .search ul {
      position: absolute;
      top: 44px;
      left: 0;
      right: 0;
      margin: 0;
      padding: 0;
      list-style: none;
      background: var(--bg-1);
      border-radius: 10px;
      overflow: hidden;
      z-index: 10;
    }

    .search ul li {
      padding: 8px 14px;
      cursor: pointer;
    }

    .search ul li:hover {
      background: var(--bg-2);
    }

    .stats {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(170px, 1fr));
      gap: 14px;
    }

    .stat {
      background: rgba(255, 255, 255, 0.05);
      border-radius: 12px;
      padding: 14px;
    }

    .stat .label {
      display: block;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #7e93a5;
    }

    .stat .value {
      display: block;
      font-size: 1.5rem;
      font-weight: 600;
      color: var(--accent);
    }

    ul.games {
      margin: 0;
      padding: 0;
      list-style: none;
      display: grid;
      gap: 10px;
    }

    ul.games li {
      display: flex;
      align-items: center;
      gap: 14px;
      background: rgba(255, 255, 255, 0.04);
      border-radius: 10px;
      padding: 8px 12px;
    }

    ul.games img {
      width: 120px;
      border-radius: 6px;
    }

    ul.games .rank {
      min-width: 2.4em;
      font-weight: 700;
      color: var(--accent);
    }

    ul.games p {
      margin: 2px 0;
    }

    ul.games .players {
      font-size: 0.85rem;
      color: #7e93a5;
    }

    .pagination {
      display: flex;
      align-items: center;
      justify-content: center;
      gap: 6px;
      flex-wrap: wrap;
    }

    .pagination button {
      appearance: none;
      border: none;
      border-radius: 8px;
      padding: 8px 12px;
      background: rgba(255, 255, 255, 0.08);
      color: var(--ink);
      cursor: pointer;
    }

    .pagination button.active {
      background: var(--accent);
      color: var(--bg-1);
      font-weight: 700;
    }

    .pagination .dots {
      padding: 0 4px;
      color: #7e93a5;
    }

    .per-page {
      display: flex;
      align-items: center;
      gap: 8px;
      font-size: 0.9rem;
    }
  </style>
</head>
<body>
  <div class="app">
    <header>
      <h1>Steam Game Stats</h1>
      <div class="search">
        <input id="search-box" type="text" placeholder="Search for a game..." autocomplete="off" />
        <ul id="suggestions"></ul>
      </div>
    </header>

    <section class="stats">
      <div class="stat"><span class="label">Players in top 10</span><span class="value">{{TOTAL_TOP}}</span></div>
      <div class="stat"><span class="label">Players in all games</span><span class="value">{{TOTAL_ALL}}</span></div>
      <div class="stat"><span class="label">Top 10 share</span><span class="value">{{TOP_SHARE}}%</span></div>
      <div class="stat"><span class="label">Rest of the games</span><span class="value">{{REST_SHARE}}%</span></div>
    </section>

    <section>
      <h2>Hall of Glory</h2>
      <ul class="games">{{TOP_ROWS}}</ul>
    </section>

    <section>
      <h2>Top Steam Games</h2>
      <div class="per-page">
        <label for="per-page">Games per page:</label>
        <select id="per-page">
          <option value="10">10</option>
          <option value="25" selected>25</option>
          <option value="50">50</option>
        </select>
      </div>
      <ul class="games" id="game-list"></ul>
      <div class="pagination" id="pagination"></div>
    </section>
  </div>

  <script>
    const listEl = document.getElementById('game-list');
    const paginationEl = document.getElementById('pagination');
    const perPageEl = document.getElementById('per-page');
    const searchEl = document.getElementById('search-box');
    const suggestionsEl = document.getElementById('suggestions');

    const renderList = (items) => {
      listEl.innerHTML = items
        .map(
          (game) =>
            `<li><span class="rank">#${game.rank}</span><img src="${game.header_image}" alt="" /><div><p class="name">${game.name}</p><p class="players">${game.concurrent_in_game.toLocaleString()} players</p></div></li>`
        )
        .join('');
    };

    const renderPagination = (data) => {
      paginationEl.innerHTML = '';
      data.page_window.forEach((slot) => {
        if (slot === '...') {
          const dots = document.createElement('span');
          dots.className = 'dots';
          dots.textContent = '...';
          paginationEl.appendChild(dots);
          return;
        }
        const button = document.createElement('button');
        button.textContent = slot;
        if (slot === data.current_page) {
          button.className = 'active';
        }
        button.addEventListener('click', () => loadPage(slot));
        paginationEl.appendChild(button);
      });
    };

    const loadPage = async (page) => {
      const perPage = perPageEl.value;
      const res = await fetch(`/api/topcurrentgames?page=${page}&per_page=${perPage}`);
      if (!res.ok) {
        return;
      }
      const data = await res.json();
      renderList(data.items);
      renderPagination(data);
    };

    perPageEl.addEventListener('change', () => loadPage(1));

    searchEl.addEventListener('input', async () => {
      const query = searchEl.value.trim();
      if (!query) {
        suggestionsEl.innerHTML = '';
        return;
      }
      const res = await fetch(`/api/search/${encodeURIComponent(query)}`);
      if (!res.ok) {
        return;
      }
      const games = await res.json();
      suggestionsEl.innerHTML = games
        .map((game) => `<li data-appid="${game.appid}">${game.name}</li>`)
        .join('');
    });

    suggestionsEl.addEventListener('click', (event) => {
      if (event.target.tagName === 'LI') {
        searchEl.value = event.target.textContent;
        suggestionsEl.innerHTML = '';
      }
    });

    loadPage(1);
  </script>
</body>
</html>
"#;
