use rayon::prelude::*;

use crate::error::GeometryError;

/// Controls how batched geometric operations are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Use the global Rayon thread pool to process every element in parallel.
    #[default]
    ParallelElements,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small batches or when debugging.
    Serial,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    Fixed(usize),
}

/// Trait to map every element of a slice with a given strategy.
pub trait MapExt<T> {
    /// Map every element with `op`, keeping the output in input order.
    ///
    /// # Arguments
    ///
    /// * `strategy` - The execution strategy.
    /// * `op` - The operation applied to each element.
    ///
    /// # Returns
    ///
    /// One output per input element, at the same index.
    fn map_with<U, F>(&self, strategy: ExecutionStrategy, op: F) -> Result<Vec<U>, GeometryError>
    where
        U: Send,
        F: Fn(&T) -> U + Sync + Send;
}

impl<T: Sync> MapExt<T> for [T] {
    fn map_with<U, F>(&self, strategy: ExecutionStrategy, op: F) -> Result<Vec<U>, GeometryError>
    where
        U: Send,
        F: Fn(&T) -> U + Sync + Send,
    {
        let out = match strategy {
            ExecutionStrategy::Serial => self.iter().map(op).collect(),
            ExecutionStrategy::ParallelElements => self.par_iter().map(op).collect(),
            ExecutionStrategy::Fixed(n) => {
                if n == 0 {
                    return Err(GeometryError::InvalidThreadCount(n));
                }
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| GeometryError::ThreadPool(e.to_string()))?;

                pool.install(|| self.par_iter().map(op).collect())
            }
        };
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_serial() -> Result<(), GeometryError> {
        let src = vec![1, 2, 3, 4];
        let dst = src.map_with(ExecutionStrategy::Serial, |s| s * 2)?;
        assert_eq!(dst, vec![2, 4, 6, 8]);
        Ok(())
    }

    #[test]
    fn test_map_parallel_keeps_order() -> Result<(), GeometryError> {
        let src = (0..1000).collect::<Vec<usize>>();
        let dst = src.map_with(ExecutionStrategy::ParallelElements, |s| s + 1)?;
        assert!(dst.iter().enumerate().all(|(i, v)| *v == i + 1));
        Ok(())
    }

    #[test]
    fn test_map_fixed() -> Result<(), GeometryError> {
        let src = vec![1, 2, 3, 4];
        let dst = src.map_with(ExecutionStrategy::Fixed(2), |s| s * 2)?;
        assert_eq!(dst, vec![2, 4, 6, 8]);
        Ok(())
    }

    #[test]
    fn test_map_fixed_error() {
        let src = vec![1];
        let res = src.map_with(ExecutionStrategy::Fixed(0), |s| *s);
        assert_eq!(res, Err(GeometryError::InvalidThreadCount(0)));
    }
}
