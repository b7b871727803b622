pub(crate) use super::{
    Field, MatrixMarketError, MatrixMarketHeader, Symmetry, try_from_path, try_from_reader,
};
