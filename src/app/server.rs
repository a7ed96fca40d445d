use crate::core::reader::{ResearchReader, SaveUpload};
use crate::core::{Catalog, ReadResearchResponse, SaveDecoder, SpeciesDescriptor};
use crate::utils::error::{ResearchError, Result};
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Multipart field carrying the save file.
pub const SAVE_FIELD: &str = "save";

#[derive(Debug, Serialize)]
pub struct HisuidexResponse {
    hisuidex: Vec<SpeciesDescriptor>,
}

pub fn router<D: SaveDecoder + 'static>(
    reader: Arc<ResearchReader<D>>,
    max_upload_bytes: usize,
) -> Router {
    Router::new()
        .route("/", get(home::<D>))
        .route("/api/hisuidex", get(hisuidex::<D>))
        .route("/api/read-research", post(read_research::<D>))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(reader)
}

pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|e| ResearchError::ServerError {
            message: format!("could not bind {}: {}", addr, e),
        })
}

/// Serves until Ctrl-C.
pub async fn serve(listener: TcpListener, router: Router) -> Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!("🚀 Listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Could not listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}

async fn home<D: SaveDecoder + 'static>(State(reader): State<Arc<ResearchReader<D>>>) -> Html<String> {
    Html(render_catalog(reader.catalog()))
}

async fn hisuidex<D: SaveDecoder + 'static>(
    State(reader): State<Arc<ResearchReader<D>>>,
) -> Json<HisuidexResponse> {
    Json(HisuidexResponse {
        hisuidex: reader.catalog().as_slice().to_vec(),
    })
}

async fn read_research<D: SaveDecoder + 'static>(
    State(reader): State<Arc<ResearchReader<D>>>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Response {
    let upload = match multipart {
        Ok(multipart) => match extract_save(multipart).await {
            Ok(upload) => upload,
            Err(e) => {
                tracing::warn!("Rejected upload: {}", e);
                let body = ReadResearchResponse::error(e.body_text());
                return (e.status(), Json(body)).into_response();
            }
        },
        // a body that is not a form carries no save field
        Err(rejection) => {
            tracing::debug!("Request body is not multipart: {}", rejection);
            SaveUpload::Absent
        }
    };

    Json(reader.read(upload)).into_response()
}

async fn extract_save(mut multipart: Multipart) -> std::result::Result<SaveUpload, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(SAVE_FIELD) {
            continue;
        }

        let filename = field.file_name().map(str::to_owned);
        let bytes = field.bytes().await?;
        return Ok(SaveUpload::from_parts(filename.as_deref(), bytes.to_vec()));
    }

    Ok(SaveUpload::Absent)
}

fn render_catalog(catalog: &Catalog) -> String {
    let mut rows = String::new();
    for species in catalog {
        rows.push_str(&format!(
            "      <tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            species.dex_hisui,
            escape_html(&species.name),
            species.dex_national
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Hisui research</title>
</head>
<body>
  <h1>Hisui dex</h1>
  <form method="post" action="/api/read-research" enctype="multipart/form-data">
    <input type="file" name="{field}">
    <button type="submit">Read research</button>
  </form>
  <table>
    <thead><tr><th>#</th><th>Name</th><th>National</th></tr></thead>
    <tbody>
{rows}    </tbody>
  </table>
</body>
</html>
"#,
        field = SAVE_FIELD,
        rows = rows
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
