// src/services/dashboard_service.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::crm::{Lead, LeadStatus, TeamMember, UserRole};
use crate::models::dashboard::{
    DashboardSummary, LeadFilter, Periodo, RepPerformance, RevenueSlice, StatusSlice,
};
use crate::models::finance::Sale;
use crate::services::crm_service::CrmService;

// Análises derivadas do dashboard: funções puras sobre as listas já
// escopadas pelo projeto ativo e um `now` explícito. Nenhum estado
// próprio; os componentes de tela só consomem o resultado.

fn dentro_da_janela(data: DateTime<Utc>, now: DateTime<Utc>, periodo: Periodo) -> bool {
    match periodo.dias() {
        Some(limite) => (now - data).num_days() <= limite,
        None => true,
    }
}

pub fn filter_leads<'a>(
    leads: &[&'a Lead],
    filter: &LeadFilter,
    now: DateTime<Utc>,
) -> Vec<&'a Lead> {
    leads
        .iter()
        .filter(|lead| {
            if let Some(sdr) = filter.sdr {
                if lead.sdr_responsavel != sdr {
                    return false;
                }
            }
            if let Some(closer) = filter.closer {
                if lead.closer_responsavel != Some(closer) {
                    return false;
                }
            }
            dentro_da_janela(lead.data_criacao, now, filter.periodo)
        })
        .copied()
        .collect()
}

pub fn filter_sales<'a>(sales: &[&'a Sale], periodo: Periodo, now: DateTime<Utc>) -> Vec<&'a Sale> {
    sales
        .iter()
        .filter(|sale| dentro_da_janela(sale.data_venda, now, periodo))
        .copied()
        .collect()
}

// --- KPIs ---

pub fn faturamento_total(sales: &[&Sale]) -> Decimal {
    sales.iter().map(|s| s.valor_bruto).sum()
}

pub fn caixa_liquido(sales: &[&Sale]) -> Decimal {
    sales.iter().map(|s| s.valor_liquido).sum()
}

// Percentual de conversão com uma casa decimal, ex: "20.0".
// Sem leads no filtro, a taxa é "0.0".
pub fn taxa_conversao(total_leads: usize, total_vendas: usize) -> String {
    if total_leads == 0 {
        return "0.0".to_string();
    }
    let taxa = Decimal::from(total_vendas as u64 * 100) / Decimal::from(total_leads as u64);
    format!("{:.1}", taxa.round_dp(1))
}

// --- Agrupamentos financeiros ---

fn acumula(slices: &mut Vec<RevenueSlice>, nome: String, valor: Decimal) {
    match slices.iter_mut().find(|s| s.nome == nome) {
        Some(slice) => slice.valor += valor,
        None => slices.push(RevenueSlice { nome, valor }),
    }
}

fn nome_de(users: &[&TeamMember], id: Uuid) -> String {
    users
        .iter()
        .find(|u| u.id == id)
        .map(|u| u.nome.clone())
        .unwrap_or_else(|| "N/A".to_string())
}

pub fn faturamento_por_metodo(sales: &[&Sale]) -> Vec<RevenueSlice> {
    let mut slices = Vec::new();
    for sale in sales {
        acumula(
            &mut slices,
            sale.metodo_pagamento.label().to_string(),
            sale.valor_bruto,
        );
    }
    slices
}

pub fn faturamento_por_closer(sales: &[&Sale], users: &[&TeamMember]) -> Vec<RevenueSlice> {
    let mut slices = Vec::new();
    for sale in sales {
        acumula(&mut slices, nome_de(users, sale.closer_id), sale.valor_bruto);
    }
    slices
}

pub fn faturamento_por_sdr(sales: &[&Sale], users: &[&TeamMember]) -> Vec<RevenueSlice> {
    let mut slices = Vec::new();
    for sale in sales {
        acumula(&mut slices, nome_de(users, sale.sdr_id), sale.valor_bruto);
    }
    slices
}

pub fn liquido_por_closer(sales: &[&Sale], users: &[&TeamMember]) -> Vec<RevenueSlice> {
    let mut slices = Vec::new();
    for sale in sales {
        acumula(
            &mut slices,
            nome_de(users, sale.closer_id),
            sale.valor_liquido,
        );
    }
    slices
}

pub fn liquido_por_sdr(sales: &[&Sale], users: &[&TeamMember]) -> Vec<RevenueSlice> {
    let mut slices = Vec::new();
    for sale in sales {
        acumula(&mut slices, nome_de(users, sale.sdr_id), sale.valor_liquido);
    }
    slices
}

pub fn comissao_por_closer(sales: &[&Sale], users: &[&TeamMember]) -> Vec<RevenueSlice> {
    let mut slices = Vec::new();
    for sale in sales {
        acumula(
            &mut slices,
            nome_de(users, sale.closer_id),
            sale.comissao_closer,
        );
    }
    slices
}

pub fn comissao_por_sdr(sales: &[&Sale], users: &[&TeamMember]) -> Vec<RevenueSlice> {
    let mut slices = Vec::new();
    for sale in sales {
        acumula(&mut slices, nome_de(users, sale.sdr_id), sale.comissao_sdr);
    }
    slices
}

// --- Distribuição de status ---

// Contagem e fatia percentual por status, ordenadas da maior para a menor
pub fn distribuicao_status(leads: &[&Lead]) -> Vec<StatusSlice> {
    let total = leads.len();
    let mut contagens: Vec<(LeadStatus, usize)> = Vec::new();
    for lead in leads {
        match contagens.iter_mut().find(|(status, _)| *status == lead.status) {
            Some((_, count)) => *count += 1,
            None => contagens.push((lead.status, 1)),
        }
    }

    let mut slices: Vec<StatusSlice> = contagens
        .into_iter()
        .map(|(status, count)| StatusSlice {
            status,
            label: status.label(),
            count,
            percentage: if total > 0 {
                (Decimal::from(count as u64 * 100) / Decimal::from(total as u64)).round_dp(1)
            } else {
                Decimal::ZERO
            },
        })
        .collect();
    slices.sort_by(|a, b| b.count.cmp(&a.count));
    slices
}

// --- Performance por responsável ---

pub fn performance_por_funcao(
    leads: &[&Lead],
    users: &[&TeamMember],
    funcao: UserRole,
) -> Vec<RepPerformance> {
    users
        .iter()
        .filter(|u| u.funcao == funcao)
        .map(|rep| {
            let do_rep: Vec<&&Lead> = leads
                .iter()
                .filter(|l| match funcao {
                    UserRole::Sdr => l.sdr_responsavel == rep.id,
                    UserRole::Closer => l.closer_responsavel == Some(rep.id),
                })
                .collect();
            RepPerformance {
                id: rep.id,
                nome: rep.nome.clone(),
                leads: do_rep.len(),
                vendas: do_rep
                    .iter()
                    .filter(|l| l.status == LeadStatus::Venda)
                    .count(),
                reembolsos: do_rep
                    .iter()
                    .filter(|l| l.status == LeadStatus::Reembolsado)
                    .count(),
            }
        })
        .collect()
}

// Snapshot completo do dashboard para o projeto ativo do CRM
pub fn summary(crm: &CrmService, filter: &LeadFilter, now: DateTime<Utc>) -> DashboardSummary {
    let leads = crm.leads();
    let sales = crm.sales();
    let users = crm.users();

    let leads_filtrados = filter_leads(&leads, filter, now);
    let sales_filtradas = filter_sales(&sales, filter.periodo, now);

    DashboardSummary {
        faturamento_total: faturamento_total(&sales_filtradas),
        caixa_liquido: caixa_liquido(&sales_filtradas),
        total_leads: leads_filtrados.len(),
        total_vendas: sales_filtradas.len(),
        taxa_conversao: taxa_conversao(leads_filtrados.len(), sales_filtradas.len()),
        faturamento_por_metodo: faturamento_por_metodo(&sales_filtradas),
        faturamento_por_closer: faturamento_por_closer(&sales_filtradas, &users),
        faturamento_por_sdr: faturamento_por_sdr(&sales_filtradas, &users),
        liquido_por_closer: liquido_por_closer(&sales_filtradas, &users),
        liquido_por_sdr: liquido_por_sdr(&sales_filtradas, &users),
        comissao_por_closer: comissao_por_closer(&sales_filtradas, &users),
        comissao_por_sdr: comissao_por_sdr(&sales_filtradas, &users),
        distribuicao_status: distribuicao_status(&leads_filtrados),
        performance_sdrs: performance_por_funcao(&leads_filtrados, &users, UserRole::Sdr),
        performance_closers: performance_por_funcao(&leads_filtrados, &users, UserRole::Closer),
    }
}
