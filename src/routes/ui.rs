use axum::{response::Html, routing::get, Router};

pub fn router() -> Router {
    Router::new().route("/", get(index))
}

async fn index() -> Html<&'static str> {
    Html(r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>GST Notice Reply Draft Assistant</title>
  <style>
    body { font-family: Arial, sans-serif; margin: 2rem; color: #1d1d1f; }
    h1 { margin-bottom: 0.5rem; }
    .columns { display: flex; gap: 1rem; flex-wrap: wrap; }
    .card { flex: 1 1 24rem; border: 1px solid #ddd; padding: 1rem; border-radius: 8px; margin-bottom: 1rem; }
    label { display: block; margin-top: 0.75rem; font-weight: 600; }
    input, textarea { width: 100%; padding: 0.5rem; box-sizing: border-box; }
    button { margin-top: 1rem; padding: 0.6rem 1rem; }
    #error { color: #b00020; white-space: pre-wrap; }
    #draftCard { display: none; }
  </style>
</head>
<body>
  <h1>GST Notice Reply Draft Assistant</h1>
  <p>Upload a GST notice and supporting workings. Optionally include a sample reply format and your
  specific points. The app will generate a structured reply draft.</p>

  <form id="draftForm">
    <div class="columns">
      <div class="card">
        <label for="notice">Upload GST Notice (PDF/TXT)</label>
        <input id="notice" name="notice" type="file" accept=".pdf,.txt,application/pdf,text/plain" />
        <label for="sample_reply">Sample Reply Format (optional)</label>
        <textarea id="sample_reply" name="sample_reply" rows="10"
          placeholder="Paste a sample reply format you want to follow..."></textarea>
      </div>
      <div class="card">
        <label for="supporting">Upload Supporting Workings (PDF/TXT, multiple)</label>
        <input id="supporting" name="supporting" type="file" multiple accept=".pdf,.txt,application/pdf,text/plain" />
        <label for="opinion">Your specific points / opinion (optional)</label>
        <textarea id="opinion" name="opinion" rows="10"
          placeholder="Add any specific point or clarification you want included..."></textarea>
      </div>
    </div>
    <button type="submit" id="generateBtn">Generate Reply</button>
  </form>
  <div id="error"></div>

  <div class="card" id="draftCard">
    <h2>Draft Reply</h2>
    <form method="post" action="/api/draft/download">
      <textarea id="reply" name="reply" rows="30"></textarea>
      <button type="submit">Download Reply</button>
    </form>
  </div>

  <script>
    const form = document.getElementById('draftForm');
    const errorBox = document.getElementById('error');
    const draftCard = document.getElementById('draftCard');
    const replyBox = document.getElementById('reply');
    const generateBtn = document.getElementById('generateBtn');

    form.addEventListener('submit', async (event) => {
      event.preventDefault();
      errorBox.textContent = '';
      generateBtn.disabled = true;
      try {
        const res = await fetch('/api/draft', { method: 'POST', body: new FormData(form) });
        const json = await res.json();
        if (!res.ok) {
          errorBox.textContent = json.error || ('Request failed with status ' + res.status);
          return;
        }
        replyBox.value = json.reply;
        draftCard.style.display = 'block';
      } catch (err) {
        errorBox.textContent = String(err);
      } finally {
        generateBtn.disabled = false;
      }
    });
  </script>
</body>
</html>"#)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_form_has_all_inputs() {
        let response = router()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();

        for name in ["notice", "sample_reply", "supporting", "opinion", "reply"] {
            assert!(html.contains(&format!("name=\"{}\"", name)), "missing {}", name);
        }
        assert!(html.contains("action=\"/api/draft/download\""));
    }
}
