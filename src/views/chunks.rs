// ============================================================================
// CHUNKS - Origen de las vistas diferidas
// ============================================================================
// Cada vista diferida es un fragmento de markup que se descarga por separado
// (`{base}/{chunk}.html`). Una respuesta no exitosa o un cuerpo vacío se
// consideran un módulo inválido.
// ============================================================================

use futures::future::LocalBoxFuture;

use crate::error::{AppError, AppResult};

pub trait ChunkSource {
    fn fetch(&self, chunk: &str) -> LocalBoxFuture<'static, AppResult<String>>;
}

/// URL de un chunk a partir de la base configurada
pub fn chunk_url(base_url: &str, chunk: &str) -> String {
    format!("{}/{}.html", base_url.trim_end_matches('/'), chunk)
}

/// Rechaza chunks vacíos
pub fn validate_chunk(chunk: &str, body: String) -> AppResult<String> {
    if body.trim().is_empty() {
        return Err(AppError::view_load(chunk, "empty chunk"));
    }
    Ok(body)
}

#[cfg(test)]
pub use memory::MemoryChunks;


#[cfg(target_arch = "wasm32")]
pub use http::HttpChunks;

#[cfg(target_arch = "wasm32")]
mod http {
    use futures::future::{FutureExt, LocalBoxFuture};
    use gloo_net::http::Request;

    use super::{chunk_url, validate_chunk, ChunkSource};
    use crate::error::{AppError, AppResult};

    /// Chunks descargados por HTTP
    pub struct HttpChunks {
        base_url: String,
    }

    impl HttpChunks {
        pub fn new(base_url: &str) -> Self {
            Self {
                base_url: base_url.to_string(),
            }
        }
    }

    impl ChunkSource for HttpChunks {
        fn fetch(&self, chunk: &str) -> LocalBoxFuture<'static, AppResult<String>> {
            let url = chunk_url(&self.base_url, chunk);
            let chunk = chunk.to_string();

            async move {
                log::info!("📦 [LOADER] Descargando {}", url);
                let response = Request::get(&url)
                    .send()
                    .await
                    .map_err(|e| AppError::view_load(&chunk, e.to_string()))?;

                if !response.ok() {
                    return Err(AppError::view_load(
                        &chunk,
                        format!("HTTP {}", response.status()),
                    ));
                }

                let body = response
                    .text()
                    .await
                    .map_err(|e| AppError::view_load(&chunk, e.to_string()))?;
                validate_chunk(&chunk, body)
            }
            .boxed_local()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_chunk_url() {
        assert_eq!(chunk_url("/chunks", "about"), "/chunks/about.html");
        assert_eq!(chunk_url("/chunks/", "about"), "/chunks/about.html");
    }

    #[test]
    fn test_memory_chunks_counts_fetches() {
        let chunks = MemoryChunks::new().with("about", "<h1>About</h1>");

        assert_eq!(block_on(chunks.fetch("about")).unwrap(), "<h1>About</h1>");
        assert_eq!(chunks.fetches("about"), 1);

        let err = block_on(chunks.fetch("missing")).unwrap_err();
        assert_eq!(err, AppError::view_load("missing", "chunk not found"));
        assert_eq!(chunks.total_fetches(), 2);
    }

    #[test]
    fn test_empty_chunk_is_malformed() {
        let chunks = MemoryChunks::new().with("about", "  \n");
        let err = block_on(chunks.fetch("about")).unwrap_err();
        assert_eq!(err, AppError::view_load("about", "empty chunk"));
    }
}
