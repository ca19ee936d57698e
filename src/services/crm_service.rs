// src/services/crm_service.rs

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::seed::SeedData,
    models::crm::{
        Gateway, GatewayUpdate, Lead, LeadStatus, LeadUpdate, Meeting, MeetingSlot, MeetingUpdate,
        NewGateway, NewLead, NewMeeting, NewProject, NewTeamMember, PaymentType, Project,
        ProjectUpdate, TeamMember, TeamMemberUpdate, UserRole,
    },
    models::finance::{CommissionRates, NewSale, Sale, SaleUpdate, SalesMethod},
};

// Dono de todas as entidades de negócio, escopadas por projeto.
// Toda leitura filtra por `project_id == current_project_id` na hora;
// não existe índice incremental. Construído uma vez no boot e injetado
// nos componentes de apresentação.
#[derive(Debug)]
pub struct CrmService {
    projects: Vec<Project>,
    current_project_id: Uuid,

    all_leads: Vec<Lead>,
    all_meetings: Vec<Meeting>,
    all_users: Vec<TeamMember>,
    all_sales: Vec<Sale>,
    all_gateways: Vec<Gateway>,

    // Percentuais aplicados sobre o valor bruto ao registrar uma venda
    commission_rates: CommissionRates,
}

impl CrmService {
    pub fn new(seed: SeedData, commission_rates: CommissionRates) -> Self {
        Self {
            projects: seed.projects,
            current_project_id: seed.default_project_id,
            all_leads: seed.leads,
            all_meetings: seed.meetings,
            all_users: seed.users,
            all_sales: seed.sales,
            all_gateways: seed.gateways,
            commission_rates,
        }
    }

    // =========================================================================
    //  PROJETOS (a fronteira de tenancy)
    // =========================================================================

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn current_project_id(&self) -> Uuid {
        self.current_project_id
    }

    // Troca o escopo ativo de todas as leituras derivadas.
    // Não valida se o id existe, fiel ao comportamento original.
    pub fn set_current_project_id(&mut self, project_id: Uuid) {
        self.current_project_id = project_id;
    }

    pub fn add_project(&mut self, data: NewProject) -> Project {
        let project = Project {
            id: Uuid::new_v4(),
            nome: data.nome,
            data_criacao: Utc::now(),
        };
        tracing::info!("Projeto criado: {}", project.nome);
        self.current_project_id = project.id;
        self.projects.push(project.clone());
        project
    }

    pub fn update_project(&mut self, project_id: Uuid, updates: ProjectUpdate) {
        if let Some(project) = self.projects.iter_mut().find(|p| p.id == project_id) {
            if let Some(nome) = updates.nome {
                project.nome = nome;
            }
        }
    }

    // Remove o projeto e cascateia sobre todas as entidades dependentes.
    // Invariante: o último projeto restante nunca pode ser removido.
    pub fn remove_project(&mut self, project_id: Uuid) -> Result<(), AppError> {
        if !self.projects.iter().any(|p| p.id == project_id) {
            return Ok(());
        }
        if self.projects.len() == 1 {
            return Err(AppError::LastProject);
        }

        self.projects.retain(|p| p.id != project_id);
        self.all_leads.retain(|l| l.project_id != project_id);
        self.all_meetings.retain(|m| m.project_id != project_id);
        self.all_users.retain(|u| u.project_id != project_id);
        self.all_sales.retain(|s| s.project_id != project_id);
        self.all_gateways.retain(|g| g.project_id != project_id);

        // O escopo ativo nunca pode apontar para um id que não existe mais
        if self.current_project_id == project_id {
            self.current_project_id = self.projects[0].id;
        }

        tracing::info!("Projeto removido com cascata de entidades dependentes");
        Ok(())
    }

    // =========================================================================
    //  LEITURAS ESCOPADAS
    // =========================================================================

    pub fn leads(&self) -> Vec<&Lead> {
        self.all_leads
            .iter()
            .filter(|l| l.project_id == self.current_project_id)
            .collect()
    }

    pub fn meetings(&self) -> Vec<&Meeting> {
        self.all_meetings
            .iter()
            .filter(|m| m.project_id == self.current_project_id)
            .collect()
    }

    pub fn users(&self) -> Vec<&TeamMember> {
        self.all_users
            .iter()
            .filter(|u| u.project_id == self.current_project_id)
            .collect()
    }

    pub fn sales(&self) -> Vec<&Sale> {
        self.all_sales
            .iter()
            .filter(|s| s.project_id == self.current_project_id)
            .collect()
    }

    pub fn gateways(&self) -> Vec<&Gateway> {
        self.all_gateways
            .iter()
            .filter(|g| g.project_id == self.current_project_id)
            .collect()
    }

    // Resolução de nome com fallback: um id pendurado vira "N/A"
    // em vez de erro.
    pub fn user_name(&self, user_id: Uuid) -> String {
        self.all_users
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| u.nome.clone())
            .unwrap_or_else(|| "N/A".to_string())
    }

    // =========================================================================
    //  LEADS
    // =========================================================================

    // `sdr_responsavel` precisa referenciar um SDR do projeto ativo;
    // `closer_responsavel`, quando presente, um Closer.
    fn validate_lead_refs(
        &self,
        sdr: Option<Uuid>,
        closer: Option<Uuid>,
    ) -> Result<(), AppError> {
        if let Some(sdr_id) = sdr {
            let ok = self.all_users.iter().any(|u| {
                u.id == sdr_id
                    && u.funcao == UserRole::Sdr
                    && u.project_id == self.current_project_id
            });
            if !ok {
                return Err(AppError::InvalidSdr);
            }
        }
        if let Some(closer_id) = closer {
            let ok = self.all_users.iter().any(|u| {
                u.id == closer_id
                    && u.funcao == UserRole::Closer
                    && u.project_id == self.current_project_id
            });
            if !ok {
                return Err(AppError::InvalidCloser);
            }
        }
        Ok(())
    }

    pub fn add_lead(&mut self, data: NewLead) -> Result<Lead, AppError> {
        self.validate_lead_refs(Some(data.sdr_responsavel), data.closer_responsavel)?;

        let now = Utc::now();
        let lead = Lead {
            id: Uuid::new_v4(),
            nome: data.nome,
            telefone: data.telefone,
            instagram: data.instagram,
            email: data.email,
            sdr_responsavel: data.sdr_responsavel,
            closer_responsavel: data.closer_responsavel,
            status: data.status,
            valor_da_venda: data.valor_da_venda,
            tipo_pagamento: data.tipo_pagamento,
            data_criacao: now,
            data_atualizacao: now,
            briefing: data.briefing,
            observacoes: data.observacoes,
            project_id: self.current_project_id,
        };
        self.all_leads.push(lead.clone());
        Ok(lead)
    }

    // Merge parcial; `data_atualizacao` é sempre renovada,
    // independente de quais campos mudaram.
    pub fn update_lead(&mut self, lead_id: Uuid, updates: LeadUpdate) -> Result<(), AppError> {
        self.validate_lead_refs(updates.sdr_responsavel, updates.closer_responsavel)?;

        if let Some(lead) = self.all_leads.iter_mut().find(|l| l.id == lead_id) {
            if let Some(nome) = updates.nome {
                lead.nome = nome;
            }
            if let Some(telefone) = updates.telefone {
                lead.telefone = telefone;
            }
            if let Some(instagram) = updates.instagram {
                lead.instagram = instagram;
            }
            if let Some(email) = updates.email {
                lead.email = Some(email);
            }
            if let Some(sdr) = updates.sdr_responsavel {
                lead.sdr_responsavel = sdr;
            }
            if let Some(closer) = updates.closer_responsavel {
                lead.closer_responsavel = Some(closer);
            }
            if let Some(status) = updates.status {
                lead.status = status;
            }
            if let Some(valor) = updates.valor_da_venda {
                lead.valor_da_venda = Some(valor);
            }
            if let Some(tipo) = updates.tipo_pagamento {
                lead.tipo_pagamento = Some(tipo);
            }
            if let Some(briefing) = updates.briefing {
                lead.briefing = Some(briefing);
            }
            if let Some(observacoes) = updates.observacoes {
                lead.observacoes = Some(observacoes);
            }
            lead.data_atualizacao = Utc::now();
        }
        Ok(())
    }

    // Atualização especializada do kanban: só muda o status (e a data
    // de atualização, como toda mutação de lead).
    pub fn update_lead_status(&mut self, lead_id: Uuid, status: LeadStatus) {
        if let Some(lead) = self.all_leads.iter_mut().find(|l| l.id == lead_id) {
            lead.status = status;
            lead.data_atualizacao = Utc::now();
        }
    }

    // Remove o lead e as reuniões dele. As vendas são histórico
    // financeiro e sobrevivem; lookups de nome caem no "N/A".
    pub fn remove_lead(&mut self, lead_id: Uuid) {
        self.all_leads.retain(|l| l.id != lead_id);
        self.all_meetings.retain(|m| m.lead_id != lead_id);
    }

    // =========================================================================
    //  REUNIÕES
    // =========================================================================

    pub fn add_meeting(&mut self, data: NewMeeting) -> Meeting {
        let meeting = Meeting {
            id: Uuid::new_v4(),
            lead_id: data.lead_id,
            data: data.data,
            hora: data.hora,
            sdr: data.sdr,
            closer: data.closer,
            tipo: data.tipo,
            status: data.status,
            observacoes: data.observacoes,
            project_id: self.current_project_id,
        };
        self.all_meetings.push(meeting.clone());
        meeting
    }

    pub fn update_meeting(&mut self, meeting_id: Uuid, updates: MeetingUpdate) {
        if let Some(meeting) = self.all_meetings.iter_mut().find(|m| m.id == meeting_id) {
            if let Some(data) = updates.data {
                meeting.data = data;
            }
            if let Some(hora) = updates.hora {
                meeting.hora = hora;
            }
            if let Some(sdr) = updates.sdr {
                meeting.sdr = sdr;
            }
            if let Some(closer) = updates.closer {
                meeting.closer = Some(closer);
            }
            if let Some(tipo) = updates.tipo {
                meeting.tipo = tipo;
            }
            if let Some(status) = updates.status {
                meeting.status = status;
            }
            if let Some(observacoes) = updates.observacoes {
                meeting.observacoes = Some(observacoes);
            }
        }
    }

    // Fluxo do calendário: cria o lead e a reunião de uma vez,
    // com o `lead_id` real amarrando os dois.
    pub fn schedule_meeting(
        &mut self,
        new_lead: NewLead,
        slot: MeetingSlot,
    ) -> Result<(Lead, Meeting), AppError> {
        let lead = self.add_lead(new_lead)?;
        let meeting = self.add_meeting(NewMeeting {
            lead_id: lead.id,
            data: slot.data,
            hora: slot.hora,
            sdr: lead.sdr_responsavel,
            closer: lead.closer_responsavel,
            tipo: slot.tipo,
            status: slot.status,
            observacoes: slot.observacoes,
        });
        Ok((lead, meeting))
    }

    // =========================================================================
    //  EQUIPE
    // =========================================================================

    pub fn add_user(&mut self, data: NewTeamMember) -> TeamMember {
        let user = TeamMember {
            id: Uuid::new_v4(),
            nome: data.nome,
            funcao: data.funcao,
            foto: data.foto,
            project_id: self.current_project_id,
        };
        self.all_users.push(user.clone());
        user
    }

    pub fn update_user(&mut self, user_id: Uuid, updates: TeamMemberUpdate) {
        if let Some(user) = self.all_users.iter_mut().find(|u| u.id == user_id) {
            if let Some(nome) = updates.nome {
                user.nome = nome;
            }
            if let Some(funcao) = updates.funcao {
                user.funcao = funcao;
            }
            if let Some(foto) = updates.foto {
                user.foto = Some(foto);
            }
        }
    }

    pub fn remove_user(&mut self, user_id: Uuid) {
        self.all_users.retain(|u| u.id != user_id);
    }

    // =========================================================================
    //  VENDAS
    // =========================================================================

    pub fn commission_rates(&self) -> CommissionRates {
        self.commission_rates
    }

    // As taxas editadas na tela financeira entram aqui e valem para
    // todos os registros de venda seguintes.
    pub fn set_commission_rates(&mut self, rates: CommissionRates) {
        self.commission_rates = rates;
    }

    // Inserção bruta: o chamador já traz os campos derivados fechados.
    pub fn add_sale(&mut self, data: NewSale) -> Sale {
        let sale = Sale {
            id: Uuid::new_v4(),
            lead_id: data.lead_id,
            closer_id: data.closer_id,
            sdr_id: data.sdr_id,
            valor_bruto: data.valor_bruto,
            metodo_pagamento: data.metodo_pagamento,
            plataforma: data.plataforma,
            taxa_percentual: data.taxa_percentual,
            taxa_valor: data.taxa_valor,
            valor_liquido: data.valor_liquido,
            comissao_closer: data.comissao_closer,
            comissao_sdr: data.comissao_sdr,
            data_venda: data.data_venda,
            project_id: self.current_project_id,
        };
        self.all_sales.push(sale.clone());
        sale
    }

    // Fluxo "registrar venda" do kanban: marca o lead como venda e
    // calcula taxa e comissões a partir do gateway escolhido.
    pub fn record_sale(
        &mut self,
        lead_id: Uuid,
        valor_bruto: Decimal,
        gateway_id: Uuid,
    ) -> Result<Sale, AppError> {
        let lead = self
            .leads()
            .into_iter()
            .find(|l| l.id == lead_id)
            .ok_or(AppError::LeadNotFound)?;
        let sdr_id = lead.sdr_responsavel;

        // Gateway desconhecido: taxa zero e método PIX, como no original
        let gateway = self.gateways().into_iter().find(|g| g.id == gateway_id);
        let (taxa_percentual, metodo_pagamento) = match gateway {
            Some(g) => (g.taxa_percentual, SalesMethod::from_gateway_name(&g.nome)),
            None => (Decimal::ZERO, SalesMethod::Pix),
        };

        // Sem closer no lead, a venda vai para o primeiro Closer da equipe
        let closer_id = lead
            .closer_responsavel
            .or_else(|| {
                self.users()
                    .into_iter()
                    .find(|u| u.funcao == UserRole::Closer)
                    .map(|u| u.id)
            })
            .ok_or(AppError::InvalidCloser)?;

        let taxa_valor = valor_bruto * taxa_percentual / Decimal::from(100);
        let valor_liquido = valor_bruto - taxa_valor;
        let comissao_closer = valor_bruto * self.commission_rates.closer;
        let comissao_sdr = valor_bruto * self.commission_rates.sdr;

        self.update_lead_status(lead_id, LeadStatus::Venda);
        self.update_lead(
            lead_id,
            LeadUpdate {
                valor_da_venda: Some(valor_bruto),
                tipo_pagamento: Some(PaymentType::Pix),
                ..LeadUpdate::default()
            },
        )?;

        let sale = self.add_sale(NewSale {
            lead_id,
            closer_id,
            sdr_id,
            valor_bruto,
            metodo_pagamento,
            plataforma: None,
            taxa_percentual,
            taxa_valor,
            valor_liquido,
            comissao_closer,
            comissao_sdr,
            data_venda: Utc::now(),
        });
        tracing::info!("Venda registrada: R$ {} via {:?}", valor_bruto, metodo_pagamento);
        Ok(sale)
    }

    pub fn update_sale(&mut self, sale_id: Uuid, updates: SaleUpdate) {
        if let Some(sale) = self.all_sales.iter_mut().find(|s| s.id == sale_id) {
            if let Some(closer_id) = updates.closer_id {
                sale.closer_id = closer_id;
            }
            if let Some(sdr_id) = updates.sdr_id {
                sale.sdr_id = sdr_id;
            }
            if let Some(valor_bruto) = updates.valor_bruto {
                sale.valor_bruto = valor_bruto;
            }
            if let Some(metodo) = updates.metodo_pagamento {
                sale.metodo_pagamento = metodo;
            }
            if let Some(plataforma) = updates.plataforma {
                sale.plataforma = Some(plataforma);
            }
            if let Some(taxa_percentual) = updates.taxa_percentual {
                sale.taxa_percentual = taxa_percentual;
            }
            if let Some(taxa_valor) = updates.taxa_valor {
                sale.taxa_valor = taxa_valor;
            }
            if let Some(valor_liquido) = updates.valor_liquido {
                sale.valor_liquido = valor_liquido;
            }
            if let Some(comissao_closer) = updates.comissao_closer {
                sale.comissao_closer = comissao_closer;
            }
            if let Some(comissao_sdr) = updates.comissao_sdr {
                sale.comissao_sdr = comissao_sdr;
            }
            if let Some(data_venda) = updates.data_venda {
                sale.data_venda = data_venda;
            }
        }
    }

    pub fn remove_sale(&mut self, sale_id: Uuid) {
        self.all_sales.retain(|s| s.id != sale_id);
    }

    // =========================================================================
    //  GATEWAYS
    // =========================================================================

    pub fn add_gateway(&mut self, data: NewGateway) -> Gateway {
        let gateway = Gateway {
            id: Uuid::new_v4(),
            nome: data.nome,
            taxa_percentual: data.taxa_percentual,
            project_id: self.current_project_id,
        };
        self.all_gateways.push(gateway.clone());
        gateway
    }

    pub fn update_gateway(&mut self, gateway_id: Uuid, updates: GatewayUpdate) {
        if let Some(gateway) = self.all_gateways.iter_mut().find(|g| g.id == gateway_id) {
            if let Some(nome) = updates.nome {
                gateway.nome = nome;
            }
            if let Some(taxa) = updates.taxa_percentual {
                gateway.taxa_percentual = taxa;
            }
        }
    }

    pub fn remove_gateway(&mut self, gateway_id: Uuid) {
        self.all_gateways.retain(|g| g.id != gateway_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::crm::{MeetingStatus, MeetingType};
    use chrono::{TimeZone, Utc};

    // Fixture mínima: dois projetos, equipe completa no primeiro
    fn servico() -> CrmService {
        let p1 = Project {
            id: Uuid::new_v4(),
            nome: "Projeto Alfa".to_string(),
            data_criacao: Utc::now(),
        };
        let p2 = Project {
            id: Uuid::new_v4(),
            nome: "Projeto Beta".to_string(),
            data_criacao: Utc::now(),
        };
        let sdr = TeamMember {
            id: Uuid::new_v4(),
            nome: "SDR Um".to_string(),
            funcao: UserRole::Sdr,
            foto: None,
            project_id: p1.id,
        };
        let closer = TeamMember {
            id: Uuid::new_v4(),
            nome: "Closer Um".to_string(),
            funcao: UserRole::Closer,
            foto: None,
            project_id: p1.id,
        };

        let seed = SeedData {
            accounts: Vec::new(),
            default_project_id: p1.id,
            projects: vec![p1, p2],
            users: vec![sdr, closer],
            leads: Vec::new(),
            meetings: Vec::new(),
            sales: Vec::new(),
            gateways: Vec::new(),
        };
        CrmService::new(seed, CommissionRates::default())
    }

    fn sdr_id(crm: &CrmService) -> Uuid {
        crm.users()
            .into_iter()
            .find(|u| u.funcao == UserRole::Sdr)
            .unwrap()
            .id
    }

    fn closer_id(crm: &CrmService) -> Uuid {
        crm.users()
            .into_iter()
            .find(|u| u.funcao == UserRole::Closer)
            .unwrap()
            .id
    }

    fn novo_lead(crm: &CrmService) -> NewLead {
        NewLead {
            nome: "Lead de Teste".to_string(),
            telefone: "(11) 90000-0000".to_string(),
            instagram: "@lead".to_string(),
            email: None,
            sdr_responsavel: sdr_id(crm),
            closer_responsavel: Some(closer_id(crm)),
            status: LeadStatus::Novo,
            valor_da_venda: None,
            tipo_pagamento: None,
            briefing: None,
            observacoes: None,
        }
    }

    #[test]
    fn leituras_escopadas_filtram_pelo_projeto_ativo() {
        let mut crm = servico();
        let p1 = crm.current_project_id();
        let p2 = crm.projects()[1].id;

        let lead = crm.add_lead(novo_lead(&crm)).unwrap();
        assert_eq!(lead.project_id, p1);
        assert_eq!(crm.leads().len(), 1);

        // Outro escopo não enxerga nada
        crm.set_current_project_id(p2);
        assert!(crm.leads().is_empty());
        assert!(crm.users().is_empty());

        crm.set_current_project_id(p1);
        assert_eq!(crm.leads().len(), 1);
    }

    #[test]
    fn add_lead_valida_papeis_dos_responsaveis() {
        let mut crm = servico();

        // Um closer não pode ser o SDR responsável
        let mut payload = novo_lead(&crm);
        payload.sdr_responsavel = closer_id(&crm);
        assert!(matches!(crm.add_lead(payload), Err(AppError::InvalidSdr)));

        // Um SDR não pode ser o closer responsável
        let mut payload = novo_lead(&crm);
        payload.closer_responsavel = Some(sdr_id(&crm));
        assert!(matches!(crm.add_lead(payload), Err(AppError::InvalidCloser)));

        assert!(crm.leads().is_empty());
    }

    #[test]
    fn toda_mutacao_de_lead_renova_data_atualizacao() {
        let mut crm = servico();
        let lead = crm.add_lead(novo_lead(&crm)).unwrap();

        // Envelhece o carimbo para tornar a renovação observável
        let antiga = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        if let Some(l) = crm.all_leads.iter_mut().find(|l| l.id == lead.id) {
            l.data_atualizacao = antiga;
        }

        crm.update_lead_status(lead.id, LeadStatus::FollowUp);
        let depois_status = crm.leads()[0].data_atualizacao;
        assert!(depois_status > antiga);
        assert_eq!(crm.leads()[0].status, LeadStatus::FollowUp);

        crm.update_lead(
            lead.id,
            LeadUpdate {
                observacoes: Some("retornou contato".to_string()),
                ..LeadUpdate::default()
            },
        )
        .unwrap();
        assert!(crm.leads()[0].data_atualizacao >= depois_status);
        assert_eq!(
            crm.leads()[0].observacoes.as_deref(),
            Some("retornou contato")
        );
        // O merge parcial não toca nos demais campos
        assert_eq!(crm.leads()[0].nome, "Lead de Teste");
    }

    #[test]
    fn remover_projeto_cascateia_todas_as_entidades() {
        let mut crm = servico();
        let p2 = crm.projects()[1].id;

        // Popula o segundo projeto
        crm.set_current_project_id(p2);
        let sdr = crm.add_user(NewTeamMember {
            nome: "SDR Beta".to_string(),
            funcao: UserRole::Sdr,
            foto: None,
        });
        let closer = crm.add_user(NewTeamMember {
            nome: "Closer Beta".to_string(),
            funcao: UserRole::Closer,
            foto: None,
        });
        let mut payload = novo_lead(&crm);
        payload.sdr_responsavel = sdr.id;
        payload.closer_responsavel = Some(closer.id);
        let lead = crm.add_lead(payload).unwrap();
        crm.add_meeting(NewMeeting {
            lead_id: lead.id,
            data: chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            hora: "10:00".to_string(),
            sdr: sdr.id,
            closer: None,
            tipo: MeetingType::Qualificacao,
            status: MeetingStatus::Marcado,
            observacoes: None,
        });
        let gateway = crm.add_gateway(NewGateway {
            nome: "PIX".to_string(),
            taxa_percentual: Decimal::new(15, 1),
        });
        crm.record_sale(lead.id, Decimal::from(1000), gateway.id)
            .unwrap();

        crm.remove_project(p2).unwrap();

        // O escopo ativo foi realocado para um projeto que ainda existe
        let restantes: Vec<Uuid> = crm.projects().iter().map(|p| p.id).collect();
        assert!(restantes.contains(&crm.current_project_id()));
        assert!(!restantes.contains(&p2));

        // Nada com o project_id removido sobrevive
        crm.set_current_project_id(p2);
        assert!(crm.leads().is_empty());
        assert!(crm.meetings().is_empty());
        assert!(crm.users().is_empty());
        assert!(crm.sales().is_empty());
        assert!(crm.gateways().is_empty());
    }

    #[test]
    fn ultimo_projeto_nao_pode_ser_removido() {
        let mut crm = servico();
        let p1 = crm.current_project_id();
        let p2 = crm.projects()[1].id;

        crm.remove_project(p2).unwrap();
        assert!(matches!(crm.remove_project(p1), Err(AppError::LastProject)));
        assert_eq!(crm.projects().len(), 1);
    }

    #[test]
    fn add_project_troca_o_escopo_ativo() {
        let mut crm = servico();
        let novo = crm.add_project(NewProject {
            nome: "Projeto Gama".to_string(),
        });
        assert_eq!(crm.current_project_id(), novo.id);
        assert_eq!(crm.projects().len(), 3);
    }

    #[test]
    fn registrar_venda_fecha_a_aritmetica_de_comissao() {
        let mut crm = servico();
        let lead = crm.add_lead(novo_lead(&crm)).unwrap();
        let gateway = crm.add_gateway(NewGateway {
            nome: "Asaas".to_string(),
            taxa_percentual: Decimal::from(5),
        });

        let sale = crm
            .record_sale(lead.id, Decimal::from(1000), gateway.id)
            .unwrap();

        assert_eq!(sale.taxa_valor, Decimal::from(50));
        assert_eq!(sale.valor_liquido, Decimal::from(950));
        assert_eq!(sale.comissao_closer, Decimal::from(100));
        assert_eq!(sale.comissao_sdr, Decimal::from(50));
        assert_eq!(sale.sdr_id, sdr_id(&crm));
        assert_eq!(sale.closer_id, closer_id(&crm));

        // O lead vira venda com o valor carimbado
        let lead_atual = crm.leads()[0];
        assert_eq!(lead_atual.status, LeadStatus::Venda);
        assert_eq!(lead_atual.valor_da_venda, Some(Decimal::from(1000)));
        assert_eq!(crm.sales().len(), 1);
    }

    #[test]
    fn taxas_de_comissao_configuradas_entram_no_calculo() {
        let mut crm = servico();
        crm.set_commission_rates(CommissionRates {
            closer: Decimal::new(20, 2), // 20%
            sdr: Decimal::new(8, 2),     // 8%
        });
        let lead = crm.add_lead(novo_lead(&crm)).unwrap();
        let gateway = crm.add_gateway(NewGateway {
            nome: "PIX".to_string(),
            taxa_percentual: Decimal::ZERO,
        });

        let sale = crm
            .record_sale(lead.id, Decimal::from(500), gateway.id)
            .unwrap();
        assert_eq!(sale.comissao_closer, Decimal::from(100));
        assert_eq!(sale.comissao_sdr, Decimal::from(40));
    }

    #[test]
    fn venda_com_gateway_desconhecido_usa_taxa_zero() {
        let mut crm = servico();
        let lead = crm.add_lead(novo_lead(&crm)).unwrap();

        let sale = crm
            .record_sale(lead.id, Decimal::from(1000), Uuid::new_v4())
            .unwrap();
        assert_eq!(sale.taxa_percentual, Decimal::ZERO);
        assert_eq!(sale.valor_liquido, Decimal::from(1000));
        assert_eq!(sale.metodo_pagamento, SalesMethod::Pix);
    }

    #[test]
    fn remover_lead_limpa_reunioes_mas_preserva_vendas() {
        let mut crm = servico();
        let lead = crm.add_lead(novo_lead(&crm)).unwrap();
        crm.add_meeting(NewMeeting {
            lead_id: lead.id,
            data: chrono::NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            hora: "14:00".to_string(),
            sdr: sdr_id(&crm),
            closer: None,
            tipo: MeetingType::Qualificacao,
            status: MeetingStatus::Marcado,
            observacoes: None,
        });
        let gateway = crm.add_gateway(NewGateway {
            nome: "PIX".to_string(),
            taxa_percentual: Decimal::new(15, 1),
        });
        crm.record_sale(lead.id, Decimal::from(2000), gateway.id)
            .unwrap();

        crm.remove_lead(lead.id);

        assert!(crm.leads().is_empty());
        assert!(crm.meetings().is_empty());
        // A venda é histórico financeiro e sobrevive
        assert_eq!(crm.sales().len(), 1);
        // O lookup de nome do lead removido cai no fallback
        assert_eq!(crm.user_name(Uuid::new_v4()), "N/A");
    }

    #[test]
    fn agendar_reuniao_cria_lead_e_reuniao_ligados() {
        let mut crm = servico();
        let slot = MeetingSlot {
            data: chrono::NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
            hora: "09:30".to_string(),
            tipo: MeetingType::Qualificacao,
            status: MeetingStatus::Marcado,
            observacoes: None,
        };

        let (lead, meeting) = crm.schedule_meeting(novo_lead(&crm), slot).unwrap();

        assert_eq!(meeting.lead_id, lead.id);
        assert_eq!(meeting.sdr, lead.sdr_responsavel);
        assert_eq!(crm.leads().len(), 1);
        assert_eq!(crm.meetings().len(), 1);
    }

    #[test]
    fn crud_de_gateway_escopado() {
        let mut crm = servico();
        let gateway = crm.add_gateway(NewGateway {
            nome: "Kiwify".to_string(),
            taxa_percentual: Decimal::new(99, 1),
        });

        crm.update_gateway(
            gateway.id,
            GatewayUpdate {
                taxa_percentual: Some(Decimal::new(89, 1)),
                ..GatewayUpdate::default()
            },
        );
        assert_eq!(crm.gateways()[0].taxa_percentual, Decimal::new(89, 1));

        crm.remove_gateway(gateway.id);
        assert!(crm.gateways().is_empty());
    }
}
