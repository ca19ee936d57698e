// src/models/auth.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// Conta de login. A senha é comparada em texto plano contra a lista
// em memória: este sistema não tem autenticação real.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: Uuid,
    pub email: String,

    #[serde(skip_serializing)] // IMPORTANTE para segurança
    pub password: String,

    pub nome: String,
    pub data_criacao: DateTime<Utc>,

    // Projetos aos quais esta conta tem acesso (relação N:N,
    // independente das entidades de negócio do projeto)
    pub project_ids: Vec<Uuid>,
}

// Dados para cadastro de uma nova conta
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupPayload {
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,
    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub password: String,
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub nome: String,
}

// Dados para login
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginPayload {
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,
    #[validate(length(min = 1, message = "A senha é obrigatória."))]
    pub password: String,
}
