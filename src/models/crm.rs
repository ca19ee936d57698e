// src/models/crm.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- ENUMS ---

// Etapas do funil de vendas (colunas do kanban)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeadStatus {
    Novo,
    FollowUp,
    Remarcado,
    NoShow,
    Venda,
    Reembolsado,
    Loss,
}

impl LeadStatus {
    // Rótulo exibido nos gráficos de distribuição
    pub fn label(&self) -> &'static str {
        match self {
            LeadStatus::Novo => "Novo",
            LeadStatus::FollowUp => "Follow-up",
            LeadStatus::Remarcado => "Remarcado",
            LeadStatus::NoShow => "No-Show",
            LeadStatus::Venda => "Venda",
            LeadStatus::Reembolsado => "Reembolsado",
            LeadStatus::Loss => "Loss / Não prosseguiu",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    Pix,
    Credito,
    Boleto,
    Debito,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "SDR")]
    Sdr,
    Closer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingType {
    Qualificacao,
    Fechamento,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeetingStatus {
    Marcado,
    Remarcado,
    Concluido,
    NoShow,
}

// --- ENTIDADES ---

// O Projeto é a fronteira de tenancy: toda entidade de negócio
// referencia exatamente um projeto via `project_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub nome: String,
    pub data_criacao: DateTime<Utc>,
}

// Membro da equipe comercial (SDR ou Closer).
// Não é uma conta de login: isso é o `Account` em models/auth.rs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: Uuid,
    pub nome: String,
    pub funcao: UserRole,
    pub foto: Option<String>,
    pub project_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: Uuid,
    pub nome: String,
    pub telefone: String,
    pub instagram: String,
    pub email: Option<String>,
    pub sdr_responsavel: Uuid,
    pub closer_responsavel: Option<Uuid>,
    pub status: LeadStatus,
    pub valor_da_venda: Option<Decimal>,
    pub tipo_pagamento: Option<PaymentType>,
    pub data_criacao: DateTime<Utc>,
    pub data_atualizacao: DateTime<Utc>,
    pub briefing: Option<String>,
    pub observacoes: Option<String>,
    pub project_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: Uuid,
    pub lead_id: Uuid,
    pub data: NaiveDate,
    pub hora: String,
    pub sdr: Uuid,
    pub closer: Option<Uuid>,
    pub tipo: MeetingType,
    pub status: MeetingStatus,
    pub observacoes: Option<String>,
    pub project_id: Uuid,
}

// Canal de pagamento com a taxa percentual cobrada sobre a venda
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gateway {
    pub id: Uuid,
    pub nome: String,
    pub taxa_percentual: Decimal,
    pub project_id: Uuid,
}

// --- PAYLOADS DE CRIAÇÃO ---
// O serviço carimba id, datas e project_id; o chamador informa só o resto.

#[derive(Debug, Clone)]
pub struct NewProject {
    pub nome: String,
}

#[derive(Debug, Clone)]
pub struct NewTeamMember {
    pub nome: String,
    pub funcao: UserRole,
    pub foto: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewLead {
    pub nome: String,
    pub telefone: String,
    pub instagram: String,
    pub email: Option<String>,
    pub sdr_responsavel: Uuid,
    pub closer_responsavel: Option<Uuid>,
    pub status: LeadStatus,
    pub valor_da_venda: Option<Decimal>,
    pub tipo_pagamento: Option<PaymentType>,
    pub briefing: Option<String>,
    pub observacoes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewMeeting {
    pub lead_id: Uuid,
    pub data: NaiveDate,
    pub hora: String,
    pub sdr: Uuid,
    pub closer: Option<Uuid>,
    pub tipo: MeetingType,
    pub status: MeetingStatus,
    pub observacoes: Option<String>,
}

// Horário de reunião sem lead: usado pelo fluxo do calendário,
// que cria o lead e a reunião juntos (o serviço liga os dois).
#[derive(Debug, Clone)]
pub struct MeetingSlot {
    pub data: NaiveDate,
    pub hora: String,
    pub tipo: MeetingType,
    pub status: MeetingStatus,
    pub observacoes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewGateway {
    pub nome: String,
    pub taxa_percentual: Decimal,
}

// --- COMANDOS DE ATUALIZAÇÃO ---
// Structs explícitas por entidade, enumerando os campos mutáveis.
// `None` significa "não alterar".

#[derive(Debug, Clone, Default)]
pub struct ProjectUpdate {
    pub nome: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TeamMemberUpdate {
    pub nome: Option<String>,
    pub funcao: Option<UserRole>,
    pub foto: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct LeadUpdate {
    pub nome: Option<String>,
    pub telefone: Option<String>,
    pub instagram: Option<String>,
    pub email: Option<String>,
    pub sdr_responsavel: Option<Uuid>,
    pub closer_responsavel: Option<Uuid>,
    pub status: Option<LeadStatus>,
    pub valor_da_venda: Option<Decimal>,
    pub tipo_pagamento: Option<PaymentType>,
    pub briefing: Option<String>,
    pub observacoes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MeetingUpdate {
    pub data: Option<NaiveDate>,
    pub hora: Option<String>,
    pub sdr: Option<Uuid>,
    pub closer: Option<Uuid>,
    pub tipo: Option<MeetingType>,
    pub status: Option<MeetingStatus>,
    pub observacoes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GatewayUpdate {
    pub nome: Option<String>,
    pub taxa_percentual: Option<Decimal>,
}
