use super::error::{Error, Result};
use super::schema::{ColumnDescriptor, Schema};
use crate::tensor::allocation_policy::{AllocationPolicy, DefaultPolicy};
use crate::tensor::element::Element;
use crate::tensor::layout::{Column, Layout};
use crate::tensor::tensor::Tensor;
use rayon::prelude::*;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace};

/// Name given to the outermost axis of columns allocated from a schema.
pub const ROW_DIM_NAME: &str = "row";

/// A columnar table whose columns are row-major tensors.
///
/// The outermost axis of every column is the row axis. The table owns
/// its columns and is the only source of truth for the number of rows:
/// every column always has exactly `max(num_rows, 1)` rows, because a
/// tensor dimension cannot be 0. An empty table is therefore physically
/// stored as one row per column, while `num_rows` reports 0.
///
/// Columns are found by index or by name. Names need not be unique;
/// when several columns share a name, lookups by name resolve the last
/// one.
#[derive(Default)]
pub struct Table {
    columns: Vec<Box<dyn Column>>,
    names: Vec<String>,
    rows: usize,
    name_index: HashMap<String, usize>,
}

impl Table {
    /// Empty table without any column.
    pub fn new() -> Self {
        Table::default()
    }

    /// Builds a table from `schema` with `rows` rows, allocating every
    /// column with `DefaultPolicy`.
    pub fn from_schema(schema: &[ColumnDescriptor], rows: usize) -> Self {
        Table::from_schema_with::<DefaultPolicy>(schema, rows)
    }

    pub fn from_schema_with<P>(schema: &[ColumnDescriptor], rows: usize) -> Self
    where
        P: AllocationPolicy,
    {
        let mut table = Table::new();
        table.set_from_schema_with::<P>(schema, rows);
        table
    }

    pub fn set_from_schema(&mut self, schema: &[ColumnDescriptor], rows: usize) {
        self.set_from_schema_with::<DefaultPolicy>(schema, rows);
    }

    /// Replaces all columns, names and the row count with fresh columns
    /// described by `schema`. Each column gets shape `[rows] + cell_shape`
    /// and dimension names `["row"] + dim_names`.
    ///
    /// Panics if a descriptor does not have one dimension name per cell
    /// dimension.
    pub fn set_from_schema_with<P>(&mut self, schema: &[ColumnDescriptor], rows: usize)
    where
        P: AllocationPolicy,
    {
        let physical_rows = rows.max(1);
        let (columns, names): (Vec<Box<dyn Column>>, Vec<String>) = schema
            .iter()
            .map(|descriptor| {
                assert_eq!(
                    descriptor.cell_shape.len(),
                    descriptor.dim_names.len(),
                    "Column {:?} has cell shape {:?} but dimension names {:?}.",
                    descriptor.name,
                    descriptor.cell_shape,
                    descriptor.dim_names,
                );
                let shape: Vec<usize> = std::iter::once(physical_rows)
                    .chain(descriptor.cell_shape.iter().copied())
                    .collect();
                let dim_names: Vec<String> = std::iter::once(ROW_DIM_NAME.to_string())
                    .chain(descriptor.dim_names.iter().cloned())
                    .collect();

                (
                    P::alloc(descriptor.element_type, shape, dim_names),
                    descriptor.name.clone(),
                )
            })
            .unzip();

        self.columns = columns;
        self.names = names;
        self.rows = rows;
        self.update_name_index();
        debug!(columns = self.columns.len(), rows, "table configured from schema");
    }

    #[inline]
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    /// True when the table has no column.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Panics if `index >= num_columns()`.
    pub fn column(&self, index: usize) -> &dyn Column {
        self.columns[index].as_ref()
    }

    /// Panics if `index >= num_columns()`.
    pub fn column_name(&self, index: usize) -> &str {
        &self.names[index]
    }

    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.name_index.get(name).copied()
    }

    fn index_of(&self, name: &str) -> Result<usize> {
        self.column_index(name).ok_or_else(|| Error::ColumnNotFound {
            name: name.to_string(),
        })
    }

    pub fn column_by_name(&self, name: &str) -> Result<&dyn Column> {
        let index = self.index_of(name)?;
        Ok(self.column(index))
    }

    /// Concrete tensor at `index`, `None` if the column is not a `Tensor<T>`.
    ///
    /// Panics if `index >= num_columns()`.
    pub fn column_as<T>(&self, index: usize) -> Option<&Tensor<T>>
    where
        T: Element,
    {
        self.columns[index].as_any().downcast_ref()
    }

    /// Mutable access to the data of a column. The outer dimension of the
    /// returned tensor must not be changed, use `set_num_rows` or
    /// `add_rows` instead.
    pub fn column_as_mut<T>(&mut self, index: usize) -> Option<&mut Tensor<T>>
    where
        T: Element,
    {
        self.columns[index].as_any_mut().downcast_mut()
    }

    pub fn column_by_name_as<T>(&self, name: &str) -> Result<&Tensor<T>>
    where
        T: Element,
    {
        let index = self.index_of(name)?;
        let column = self.columns[index].as_ref();
        column
            .as_any()
            .downcast_ref()
            .ok_or_else(|| Error::ColumnTypeMismatch {
                name: name.to_string(),
                expected: T::TYPE,
                actual: column.element_type(),
            })
    }

    /// See `column_as_mut`.
    pub fn column_by_name_as_mut<T>(&mut self, name: &str) -> Result<&mut Tensor<T>>
    where
        T: Element,
    {
        let index = self.index_of(name)?;
        let actual = self.columns[index].element_type();
        self.columns[index]
            .as_any_mut()
            .downcast_mut()
            .ok_or_else(|| Error::ColumnTypeMismatch {
                name: name.to_string(),
                expected: T::TYPE,
                actual,
            })
    }

    /// Schema describing the current columns: the row axis is stripped
    /// from every shape and dimension name list.
    pub fn schema(&self) -> Schema {
        self.columns
            .iter()
            .zip(self.names.iter())
            .map(|(column, name)| ColumnDescriptor {
                name: name.clone(),
                element_type: column.element_type(),
                cell_shape: column.shape().iter().skip(1).copied().collect(),
                dim_names: column.dim_names().iter().skip(1).cloned().collect(),
            })
            .collect()
    }

    /// Adopts `column` under `name` and resizes its outer dimension to
    /// the current number of rows.
    ///
    /// Fails without modifying the table if `column` is not row-major or
    /// has no axis at all.
    pub fn add_column<C>(&mut self, column: C, name: impl Into<String>) -> Result<()>
    where
        C: Column + 'static,
    {
        self.add_boxed_column(Box::new(column), name)
    }

    pub fn add_boxed_column(&mut self, mut column: Box<dyn Column>, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if !column.is_row_major() {
            debug!(column = %name, shape = ?column.shape(), strides = ?column.strides(), "rejected column");
            return Err(Error::NotRowMajor { name });
        }
        if column.shape().is_empty() {
            debug!(column = %name, "rejected column of order 0");
            return Err(Error::NoRowAxis { name });
        }

        column.set_outer_dim(self.rows.max(1));
        debug!(column = %name, shape = ?column.shape(), "column added");
        self.columns.push(column);
        self.names.push(name);
        self.update_name_index();
        Ok(())
    }

    /// Appends `n` default-valued rows to every column and advances the
    /// row count accordingly.
    ///
    /// On a table with 0 rows the columns are not grown by `n`: their
    /// single placeholder row is not a real row, so they are set to
    /// exactly `n` rows instead. This keeps every column at
    /// `max(num_rows, 1)` rows.
    pub fn add_rows(&mut self, n: usize) {
        if n == 0 {
            return;
        }

        if self.rows == 0 {
            self.columns
                .par_iter_mut()
                .for_each(|column| column.set_outer_dim(n));
        } else {
            self.columns
                .par_iter_mut()
                .for_each(|column| column.grow_outer_dim(n));
        }
        self.rows += n;
        debug!(added = n, rows = self.rows, "rows added");
    }

    /// Sets the number of rows of every column. Shrinking drops the
    /// trailing rows, growing appends default-valued rows.
    ///
    /// With `rows == 0` the columns keep a single physical row.
    pub fn set_num_rows(&mut self, rows: usize) {
        let physical_rows = rows.max(1);
        self.columns
            .par_iter_mut()
            .for_each(|column| column.set_outer_dim(physical_rows));
        self.rows = rows;
        debug!(rows, "row count set");
    }

    fn update_name_index(&mut self) {
        // later duplicates overwrite earlier entries
        self.name_index = self
            .names
            .iter()
            .enumerate()
            .map(|(index, name)| (name.clone(), index))
            .collect();
        trace!(names = ?self.names, "column name index rebuilt");
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns: Vec<_> = self
            .names
            .iter()
            .zip(self.columns.iter())
            .map(|(name, column)| (name, column.element_type(), column.shape()))
            .collect();
        f.debug_struct("Table")
            .field("rows", &self.rows)
            .field("columns", &columns)
            .finish()
    }
}
