//! Wire DTOs for the assistance-program API.
//!
//! DESIGN
//! ======
//! Field names mirror the server payloads (Portuguese, mixed snake and camel
//! case) through serde attributes so the Rust side can keep idiomatic names.
//! The server runs on a relational store that sometimes renders booleans
//! as `0/1` and numbers as strings, so a few fields deserialize leniently.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A beneficiary family as returned by `/buscar-familias`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Family {
    #[serde(deserialize_with = "deserialize_i64_lenient")]
    pub id: i64,
    #[serde(rename = "responsavel_nome")]
    pub responsible_name: String,
    #[serde(default)]
    pub cpf: String,
    #[serde(rename = "telefone", default)]
    pub phone: Option<String>,
    #[serde(rename = "numero_pessoas", default, deserialize_with = "deserialize_i64_lenient")]
    pub household_size: i64,
    #[serde(rename = "numero_filhos", default)]
    pub child_count: Option<i64>,
    #[serde(rename = "observacoes", default)]
    pub notes: Option<String>,
    #[serde(rename = "ultimaEntrega", default)]
    pub last_delivery: Option<String>,
}

/// Request body for `POST /cadastrar-familia`, one field per form input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyForm {
    #[serde(rename = "responsavelNome")]
    pub responsible_name: String,
    #[serde(rename = "responsavelCPF")]
    pub cpf: String,
    #[serde(rename = "responsavelNascimento")]
    pub birth_date: String,
    #[serde(rename = "responsavelIdade")]
    pub age: String,
    #[serde(rename = "responsavelGenero")]
    pub gender: String,
    #[serde(rename = "responsavelEndereco")]
    pub address: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "numeroPessoas")]
    pub household_size: String,
    #[serde(rename = "numeroFilhos")]
    pub child_count: String,
    #[serde(rename = "observacoes")]
    pub notes: String,
}

/// A delivery row as returned by `/listar-entregas`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "data_entrega")]
    pub date: String,
    #[serde(rename = "familia_nome")]
    pub family_name: String,
    #[serde(rename = "responsavel", default)]
    pub responsible: String,
    #[serde(rename = "quantidade", deserialize_with = "deserialize_i64_lenient")]
    pub quantity: i64,
    #[serde(rename = "responsavel_entrega", default)]
    pub delivered_by: String,
}

/// Request body for `POST /registrar-entrega`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryForm {
    #[serde(rename = "familiaEntrega")]
    pub family_id: String,
    #[serde(rename = "dataEntrega")]
    pub date: String,
    #[serde(rename = "quantidadeCestas")]
    pub quantity: String,
    #[serde(rename = "responsavelEntrega")]
    pub delivered_by: String,
}

/// Aggregate counters for the dashboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    #[serde(default, deserialize_with = "deserialize_i64_lenient")]
    pub total_familias: i64,
    #[serde(default, deserialize_with = "deserialize_i64_lenient")]
    pub cestas_mes: i64,
    #[serde(default, deserialize_with = "deserialize_i64_lenient")]
    pub total_pessoas: i64,
    #[serde(default, deserialize_with = "deserialize_i64_lenient")]
    pub cestas_estoque: i64,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub ultimas_entregas: Vec<RecentDelivery>,
}

/// One of the latest deliveries shown on the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecentDelivery {
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "familia")]
    pub family: String,
    #[serde(rename = "responsavel", default)]
    pub responsible: String,
    #[serde(rename = "quantidade", deserialize_with = "deserialize_i64_lenient")]
    pub quantity: i64,
}

/// A supply item ("insumo").
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SupplyItem {
    #[serde(deserialize_with = "deserialize_i64_lenient")]
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "unidade", default)]
    pub unit: String,
    #[serde(rename = "ativo", default, deserialize_with = "deserialize_flag")]
    pub active: bool,
}

/// Request body for `POST /insumos`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewSupplyItem {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "unidade")]
    pub unit: String,
}

/// A named bundle of supply items.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Kit {
    #[serde(deserialize_with = "deserialize_i64_lenient")]
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "ativo", default, deserialize_with = "deserialize_flag")]
    pub active: bool,
}

/// Request body for `POST /kits`. An empty description is sent as `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewKit {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
}

/// A supply item line inside a kit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KitItem {
    #[serde(deserialize_with = "deserialize_i64_lenient")]
    pub id: i64,
    #[serde(default)]
    pub kit_id: Option<i64>,
    #[serde(default)]
    pub insumo_id: Option<i64>,
    #[serde(rename = "quantidade", deserialize_with = "deserialize_f64_lenient")]
    pub quantity: f64,
    #[serde(rename = "insumo_nome", alias = "nome", default)]
    pub supply_name: String,
    #[serde(rename = "unidade", default)]
    pub unit: String,
}

/// Request body for `POST /kits/{kit_id}/itens`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KitItemUpsert {
    pub insumo_id: i64,
    #[serde(rename = "quantidade", serialize_with = "serialize_quantity")]
    pub quantity: f64,
}

/// Request body for `POST /registrar-entrada-estoque`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StockEntry {
    #[serde(rename = "quantidade")]
    pub quantity: i64,
    #[serde(rename = "fornecedor")]
    pub supplier: Option<String>,
    #[serde(rename = "observacoes")]
    pub notes: Option<String>,
}

/// Response of `GET /saldo-estoque`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StockBalance {
    #[serde(rename = "cestasEstoque", deserialize_with = "deserialize_i64_lenient")]
    pub baskets: i64,
}

/// One entry of the stock ledger (`GET /movimentacoes-estoque`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockMovement {
    #[serde(rename = "data_movimentacao")]
    pub date: String,
    #[serde(rename = "quantidade_entrada", default, deserialize_with = "deserialize_i64_lenient")]
    pub quantity_in: i64,
    #[serde(rename = "quantidade_saida", default, deserialize_with = "deserialize_i64_lenient")]
    pub quantity_out: i64,
    #[serde(rename = "motivo_saida", default)]
    pub reason: Option<String>,
    #[serde(rename = "responsavel", default)]
    pub responsible: Option<String>,
}

/// Request body for `POST /api/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response body of `POST /api/login`, on success and on failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error payload shared by every endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

fn deserialize_i64_lenient<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match &value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .ok_or_else(|| D::Error::custom(format!("expected integer, got {n}"))),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("expected integer string, got {s:?}"))),
        serde_json::Value::Null => Ok(0),
        other => Err(D::Error::custom(format!("expected integer, got {other}"))),
    }
}

fn deserialize_f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match &value {
        serde_json::Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| D::Error::custom(format!("expected number, got {n}"))),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("expected numeric string, got {s:?}"))),
        other => Err(D::Error::custom(format!("expected number, got {other}"))),
    }
}

/// `null` and a missing key both mean "no entries".
fn deserialize_null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Whole quantities go out as JSON integers (`3`, not `3.0`).
#[allow(clippy::trivially_copy_pass_by_ref, clippy::cast_possible_truncation)]
fn serialize_quantity<S>(quantity: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if quantity.fract() == 0.0 && quantity.abs() < 9_007_199_254_740_992.0 {
        serializer.serialize_i64(*quantity as i64)
    } else {
        serializer.serialize_f64(*quantity)
    }
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match &value {
        serde_json::Value::Bool(b) => Ok(*b),
        serde_json::Value::Number(n) => Ok(n.as_f64().is_some_and(|f| f != 0.0)),
        serde_json::Value::Null => Ok(false),
        other => Err(D::Error::custom(format!("expected boolean flag, got {other}"))),
    }
}
