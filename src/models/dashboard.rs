// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::models::crm::LeadStatus;

// Janela de tempo dos filtros do dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Periodo {
    Ultimos7,
    Ultimos30,
    Ultimos90,
    #[default]
    Todos,
}

impl Periodo {
    pub fn dias(&self) -> Option<i64> {
        match self {
            Periodo::Ultimos7 => Some(7),
            Periodo::Ultimos30 => Some(30),
            Periodo::Ultimos90 => Some(90),
            Periodo::Todos => None,
        }
    }
}

// Filtros aplicados sobre os leads do projeto ativo
#[derive(Debug, Clone, Copy, Default)]
pub struct LeadFilter {
    pub periodo: Periodo,
    pub sdr: Option<Uuid>,
    pub closer: Option<Uuid>,
}

// Fatia de um gráfico financeiro: nome do responsável/método e valor somado
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueSlice {
    pub nome: String,
    pub valor: Decimal,
}

// Uma linha da distribuição de status dos leads
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSlice {
    pub status: LeadStatus,
    pub label: &'static str,
    pub count: usize,
    pub percentage: Decimal,
}

// Linha das tabelas de performance por SDR/Closer
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepPerformance {
    pub id: Uuid,
    pub nome: String,
    pub leads: usize,
    pub vendas: usize,
    pub reembolsos: usize,
}

// Snapshot completo do dashboard para o projeto ativo
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub faturamento_total: Decimal, // Soma dos valores brutos
    pub caixa_liquido: Decimal,     // Líquido após taxas
    pub total_leads: usize,
    pub total_vendas: usize,
    pub taxa_conversao: String, // Percentual com uma casa, ex: "20.0"
    pub faturamento_por_metodo: Vec<RevenueSlice>,
    pub faturamento_por_closer: Vec<RevenueSlice>,
    pub faturamento_por_sdr: Vec<RevenueSlice>,
    pub liquido_por_closer: Vec<RevenueSlice>,
    pub liquido_por_sdr: Vec<RevenueSlice>,
    pub comissao_por_closer: Vec<RevenueSlice>,
    pub comissao_por_sdr: Vec<RevenueSlice>,
    pub distribuicao_status: Vec<StatusSlice>,
    pub performance_sdrs: Vec<RepPerformance>,
    pub performance_closers: Vec<RepPerformance>,
}
