//! Data models for rows, query parameters, and edit payloads.

/// Employee row record and cell/column types.
pub mod employee;


pub use employee::{
    CellValue, Column, Employee, QueryParams, QueryResult, SortColumn, SortDirection,
    UpdateRequest,
};
