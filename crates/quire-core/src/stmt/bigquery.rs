/// BigQuery `SELECT AS STRUCT` / `SELECT AS VALUE`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BigQueryQualifier {
    AsStruct,
    AsValue,
}
