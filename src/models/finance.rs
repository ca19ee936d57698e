// src/models/finance.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- Enums ---

// Método de pagamento registrado na venda (nome do gateway usado)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SalesMethod {
    #[serde(rename = "TMB")]
    Tmb,
    Zolt,
    Ombrelone,
    #[serde(rename = "PIX")]
    Pix,
    Credito,
    Boleto,
    #[serde(rename = "DINHEIRO")]
    Dinheiro,
    Deposito,
}

impl SalesMethod {
    // O registro de venda escolhe o método pelo nome do gateway.
    // Gateway desconhecido cai em PIX, como no fluxo original do kanban.
    pub fn from_gateway_name(nome: &str) -> Self {
        match nome {
            "TMB" => SalesMethod::Tmb,
            "Zolt" => SalesMethod::Zolt,
            "Ombrelone" => SalesMethod::Ombrelone,
            "Boleto" => SalesMethod::Boleto,
            "Crédito" | "Credito" => SalesMethod::Credito,
            "DINHEIRO" => SalesMethod::Dinheiro,
            "Depósito" | "Deposito" => SalesMethod::Deposito,
            _ => SalesMethod::Pix,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SalesMethod::Tmb => "TMB",
            SalesMethod::Zolt => "Zolt",
            SalesMethod::Ombrelone => "Ombrelone",
            SalesMethod::Pix => "PIX",
            SalesMethod::Credito => "Credito",
            SalesMethod::Boleto => "Boleto",
            SalesMethod::Dinheiro => "DINHEIRO",
            SalesMethod::Deposito => "Deposito",
        }
    }
}

// Plataforma de venda (quando a venda passou por uma plataforma externa)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Zolt,
    Kiwify,
    Eduzz,
    Yampi,
    Asaas,
    Outros,
}

// --- Structs ---

// Venda fechada, com os campos financeiros derivados já calculados:
//   taxa_valor     = valor_bruto * taxa_percentual / 100
//   valor_liquido  = valor_bruto - taxa_valor
//   comissao_closer = valor_bruto * taxa do closer
//   comissao_sdr    = valor_bruto * taxa do SDR
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: Uuid,
    pub lead_id: Uuid,
    pub closer_id: Uuid,
    pub sdr_id: Uuid,
    pub valor_bruto: Decimal,
    pub metodo_pagamento: SalesMethod,
    pub plataforma: Option<Platform>,
    pub taxa_percentual: Decimal,
    pub taxa_valor: Decimal,
    pub valor_liquido: Decimal,
    pub comissao_closer: Decimal,
    pub comissao_sdr: Decimal,
    pub data_venda: DateTime<Utc>,
    pub project_id: Uuid,
}

// Payload para `add_sale`: o chamador já traz os campos derivados.
// O fluxo `record_sale` do serviço calcula tudo a partir do gateway.
#[derive(Debug, Clone)]
pub struct NewSale {
    pub lead_id: Uuid,
    pub closer_id: Uuid,
    pub sdr_id: Uuid,
    pub valor_bruto: Decimal,
    pub metodo_pagamento: SalesMethod,
    pub plataforma: Option<Platform>,
    pub taxa_percentual: Decimal,
    pub taxa_valor: Decimal,
    pub valor_liquido: Decimal,
    pub comissao_closer: Decimal,
    pub comissao_sdr: Decimal,
    pub data_venda: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct SaleUpdate {
    pub closer_id: Option<Uuid>,
    pub sdr_id: Option<Uuid>,
    pub valor_bruto: Option<Decimal>,
    pub metodo_pagamento: Option<SalesMethod>,
    pub plataforma: Option<Platform>,
    pub taxa_percentual: Option<Decimal>,
    pub taxa_valor: Option<Decimal>,
    pub valor_liquido: Option<Decimal>,
    pub comissao_closer: Option<Decimal>,
    pub comissao_sdr: Option<Decimal>,
    pub data_venda: Option<DateTime<Utc>>,
}

// Percentuais de comissão aplicados sobre o valor bruto da venda,
// independente das taxas dos gateways de pagamento.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionRates {
    pub closer: Decimal,
    pub sdr: Decimal,
}

impl Default for CommissionRates {
    fn default() -> Self {
        Self {
            closer: Decimal::new(10, 2), // 10%
            sdr: Decimal::new(5, 2),     // 5%
        }
    }
}
