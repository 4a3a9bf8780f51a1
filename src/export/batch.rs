//! Export many charts at once, optionally on a rayon pool.

use rayon::prelude::*;

use crate::{
    chart::{config::ChartRequest, descriptor::Chart},
    export::envelope::ExportEnvelope,
    foundation::error::{ChartError, ChartResult},
    foundation::table::Table,
    render::backend::Renderer,
};

/// One chart to build and serialize.
#[derive(Clone, Debug)]
pub struct ExportJob {
    /// Caller label used in logs.
    pub name: String,
    pub table: Table,
    pub request: ChartRequest,
}

impl ExportJob {
    pub fn new(name: impl Into<String>, table: Table, request: ChartRequest) -> Self {
        Self {
            name: name.into(),
            table,
            request,
        }
    }

    pub fn run(self, renderer: &dyn Renderer) -> ChartResult<ExportEnvelope> {
        let _span = tracing::debug_span!("export_job", name = %self.name).entered();
        Chart::build(self.table, self.request, renderer)?.export()
    }
}

#[derive(Clone, Debug, Default)]
pub struct ExportThreading {
    pub parallel: bool,
    /// Worker count; rayon's default when unset.
    pub threads: Option<usize>,
}

/// Build and serialize every job.
///
/// The outer error is reserved for pool setup. Each job gets its own result,
/// in input order, so one bad chart does not hide the others.
#[tracing::instrument(skip_all, fields(jobs = jobs.len(), parallel = threading.parallel))]
pub fn export_batch(
    jobs: Vec<ExportJob>,
    renderer: &dyn Renderer,
    threading: &ExportThreading,
) -> ChartResult<Vec<ChartResult<ExportEnvelope>>> {
    let results: Vec<_> = if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        pool.install(|| jobs.into_par_iter().map(|job| job.run(renderer)).collect())
    } else {
        jobs.into_iter().map(|job| job.run(renderer)).collect()
    };

    let failed = results.iter().filter(|r| r.is_err()).count();
    tracing::info!(total = results.len(), failed, "batch export finished");
    Ok(results)
}

fn build_thread_pool(threads: Option<usize>) -> ChartResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ChartError::validation(
            "export threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ChartError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/export/batch.rs"]
mod tests;
