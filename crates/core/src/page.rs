/// Render the landing page listing `languages`.
///
/// The page is self-contained: markup, styling and the script that talks to
/// the JSON endpoints all live in the returned string.
pub fn render_index(languages: &[&str]) -> String {
    let options: String = languages
        .iter()
        .map(|lang| {
            let lang = html_escape::encode_double_quoted_attribute(lang);
            format!("<option value=\"{lang}\">{lang}</option>")
        })
        .collect::<Vec<_>>()
        .join("\n          ");

    INDEX_TEMPLATE.replace("{{options}}", &options)
}

const INDEX_TEMPLATE: &str = r##"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>CodePal</title>
    <style>
      body { font-family: system-ui, sans-serif; max-width: 960px; margin: 2rem auto; }
      textarea { width: 100%; font-family: monospace; }
      pre { background: #f4f4f4; padding: 1rem; white-space: pre-wrap; }
    </style>
  </head>
  <body>
    <h1>CodePal</h1>
    <label>Language
      <select id="language">
          {{options}}
      </select>
    </label>
    <textarea id="prompt" rows="2" placeholder="Describe a program, e.g. a calculator"></textarea>
    <p>
      <button id="btn-generate">Generate</button>
      <button id="btn-explain">Explain</button>
      <button id="btn-debug">Debug</button>
    </p>
    <textarea id="code" rows="16"></textarea>
    <pre id="output"></pre>
    <script>
      const $ = (q) => document.querySelector(q);
      async function postJSON(url, payload) {
        const res = await fetch(url, {
          method: "POST",
          headers: { "Content-Type": "application/json" },
          body: JSON.stringify(payload),
        });
        if (!res.ok && res.status !== 400) { throw new Error("Request failed"); }
        return res.json();
      }
      $("#btn-generate").addEventListener("click", async () => {
        $("#output").textContent = "Generating...";
        try {
          const data = await postJSON("/api/generate", { language: $("#language").value, prompt: $("#prompt").value.trim() });
          if (data.ok) { $("#code").value = data.code; $("#output").textContent = "Generated"; }
          else { $("#output").textContent = "Error: " + data.error; }
        } catch (e) {
          $("#output").textContent = "Error: " + e.message;
        }
      });
      $("#btn-explain").addEventListener("click", async () => {
        $("#output").textContent = "Explaining...";
        try {
          const data = await postJSON("/api/explain", { language: $("#language").value, code: $("#code").value });
          $("#output").textContent = data.ok ? data.explanation : "Error: " + data.error;
        } catch (e) {
          $("#output").textContent = "Error: " + e.message;
        }
      });
      $("#btn-debug").addEventListener("click", async () => {
        $("#output").textContent = "Debugging...";
        try {
          const data = await postJSON("/api/debug", { language: $("#language").value, code: $("#code").value });
          if (!data.ok) { $("#output").textContent = "Error: " + data.error; return; }
          const issues = (data.issues || []).map((i) => "- " + i).join("\n");
          $("#output").textContent = (issues || "No obvious issues found.") + "\n\nSuggestion: " + data.suggestion;
        } catch (e) {
          $("#output").textContent = "Error: " + e.message;
        }
      });
    </script>
  </body>
</html>
"##;
