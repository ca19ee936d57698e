//src/main.rs

use chrono::Utc;

// Declaração dos nossos módulos
mod common;
mod config;
mod db;
mod models;
mod services;

use crate::config::AppState;
use crate::models::dashboard::LeadFilter;
use crate::services::dashboard_service;

fn main() {
    // Inicializa o logger antes de qualquer coisa.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new().expect("Falha ao inicializar o estado da aplicação.");

    match app_state.auth.current_user() {
        Some(user) => tracing::info!("👤 Sessão ativa: {} <{}>", user.nome, user.email),
        None => tracing::info!("Nenhuma sessão ativa; aguardando login"),
    }

    let projeto_ativo = app_state
        .crm
        .projects()
        .iter()
        .find(|p| p.id == app_state.crm.current_project_id())
        .map(|p| p.nome.clone())
        .unwrap_or_else(|| "desconhecido".to_string());

    // Snapshot do dashboard para o projeto ativo, sem filtro de período
    let resumo = dashboard_service::summary(&app_state.crm, &LeadFilter::default(), Utc::now());
    tracing::info!("📊 Projeto ativo: {}", projeto_ativo);
    tracing::info!(
        "📈 {} leads | {} vendas | conversão {}%",
        resumo.total_leads,
        resumo.total_vendas,
        resumo.taxa_conversao
    );
    tracing::info!(
        "💰 Faturamento R$ {} | Caixa líquido R$ {}",
        resumo.faturamento_total,
        resumo.caixa_liquido
    );
}
