// src/config.rs

use std::{env, path::PathBuf};

use anyhow::Context;
use rust_decimal::Decimal;

use crate::db::{seed, SessionStore};
use crate::models::finance::CommissionRates;
use crate::services::{AuthService, CrmService};

// Configuração carregada do ambiente (com defaults para uso local)
#[derive(Debug, Clone)]
pub struct AppConfig {
    // Onde o id da sessão é persistido (o "localStorage" da aplicação)
    pub session_file: PathBuf,
    pub commission_rates: CommissionRates,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let session_file = env::var("SESSION_FILE")
            .unwrap_or_else(|_| ".crm_session.json".to_string())
            .into();

        let closer = env::var("COMISSAO_CLOSER")
            .unwrap_or_else(|_| "0.10".to_string())
            .parse::<Decimal>()
            .context("COMISSAO_CLOSER deve ser um decimal, ex: 0.10")?;
        let sdr = env::var("COMISSAO_SDR")
            .unwrap_or_else(|_| "0.05".to_string())
            .parse::<Decimal>()
            .context("COMISSAO_SDR deve ser um decimal, ex: 0.05")?;

        Ok(Self {
            session_file,
            commission_rates: CommissionRates { closer, sdr },
        })
    }
}

// O estado compartilhado da aplicação: os dois serviços donos de estado,
// construídos uma única vez no boot e injetados nas telas.
pub struct AppState {
    pub auth: AuthService,
    pub crm: CrmService,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = AppConfig::from_env()?;

        // --- Monta o gráfico de dependências ---
        let seed = seed::demo();
        let session = SessionStore::new(config.session_file.clone());

        let mut auth = AuthService::new(seed.accounts.clone(), session);
        auth.resume_session();

        let crm = CrmService::new(seed, config.commission_rates);

        tracing::info!("✅ Estado da aplicação montado com sucesso!");
        Ok(Self { auth, crm })
    }
}
