//! Fixed-size chunked implementation with ordered reduction.
//!
//! The input is cut into chunks of `chunk_size` elements. Each chunk is
//! summed in order with a single accumulator, then the per-chunk partial
//! sums are added in chunk order. Chunks are spread across scoped threads
//! when there is more than one, but chunk boundaries depend only on
//! `chunk_size`, so the result is bit-identical whatever the thread count.

use super::original::dot_product_original;

/// Chunk size used when none is configured.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Compute the dot product with [`DEFAULT_CHUNK_SIZE`] chunks.
pub fn dot_product_chunked(x: &[f64], w: &[f64]) -> f64 {
    dot_product_chunked_with(x, w, DEFAULT_CHUNK_SIZE)
}

/// Compute the dot product with an explicit chunk size.
///
/// A `chunk_size` of zero is treated as one.
pub fn dot_product_chunked_with(x: &[f64], w: &[f64], chunk_size: usize) -> f64 {
    debug_assert_eq!(x.len(), w.len(), "Vectors must have the same length");

    let len = x.len().min(w.len());
    let (x, w) = (&x[..len], &w[..len]);
    let chunk_size = chunk_size.max(1);

    if len <= chunk_size {
        return dot_product_original(x, w);
    }

    chunk_partials(x, w, chunk_size)
        .into_iter()
        .fold(0.0f64, |acc, partial| acc + partial)
}

/// Per-chunk partial sums, in chunk order.
fn chunk_partials(x: &[f64], w: &[f64], chunk_size: usize) -> Vec<f64> {
    let num_chunks = x.len().div_ceil(chunk_size);
    let num_threads = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
        .min(num_chunks);

    if num_threads <= 1 {
        return span_partials(x, w, chunk_size);
    }

    // Each thread takes a contiguous run of whole chunks.
    let chunks_per_thread = num_chunks.div_ceil(num_threads);
    let span = chunks_per_thread * chunk_size;

    std::thread::scope(|s| {
        let pending: Vec<Pending<'_>> = x
            .chunks(span)
            .zip(w.chunks(span))
            .map(|(xs, ws)| {
                match std::thread::Builder::new()
                    .spawn_scoped(s, move || span_partials(xs, ws, chunk_size))
                {
                    Ok(handle) => Pending::Spawned(handle),
                    // No thread available: sum this span on the caller's thread.
                    Err(_) => Pending::Inline(span_partials(xs, ws, chunk_size)),
                }
            })
            .collect();

        collect_partials(pending)
    })
}

/// Partial sums of one thread's span, one per chunk.
fn span_partials(xs: &[f64], ws: &[f64], chunk_size: usize) -> Vec<f64> {
    xs.chunks(chunk_size)
        .zip(ws.chunks(chunk_size))
        .map(|(a, b)| dot_product_original(a, b))
        .collect()
}

/// A span's partial sums, either still running or already computed.
enum Pending<'scope> {
    Spawned(std::thread::ScopedJoinHandle<'scope, Vec<f64>>),
    Inline(Vec<f64>),
}

/// Flatten span results in span order.
fn collect_partials(pending: Vec<Pending<'_>>) -> Vec<f64> {
    pending
        .into_iter()
        .flat_map(|p| match p {
            Pending::Spawned(handle) => match handle.join() {
                Ok(partials) => partials,
                Err(payload) => std::panic::resume_unwind(payload),
            },
            Pending::Inline(partials) => partials,
        })
        .collect()
}
