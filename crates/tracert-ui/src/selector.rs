use crate::dom::{ClickHandler, Dom};
use crate::error::{DomError, SelectorError, SourceError};
use crate::radio::{RadioConfig, RadioFactory, RadioOption};
use crate::source::NodeSource;
use tracert_model::{Group, Selection};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    pub endpoint: String,
    pub container_id: String,
    pub radio_name: String,
    pub radio_id: String,
    pub all_label: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            endpoint: "/api/nodes".to_string(),
            container_id: "groups".to_string(),
            radio_name: "group".to_string(),
            radio_id: "group".to_string(),
            all_label: "All".to_string(),
        }
    }
}

#[derive(Debug)]
pub enum SelectorPhase<N> {
    Loading,
    Ready(Vec<RadioOption<N>>),
    Failed(SourceError),
}

/// The group filter: one "All" option plus one option per known group.
pub struct GroupSelector<'d, D: Dom> {
    factory: RadioFactory<'d, D>,
    container: D::Node,
    config: SelectorConfig,
    on_click: Option<ClickHandler<D::Node>>,
    phase: SelectorPhase<D::Node>,
}

impl<'d, D: Dom> GroupSelector<'d, D> {
    pub fn new(dom: &'d D, container: D::Node, config: SelectorConfig) -> Self {
        Self {
            factory: RadioFactory::new(dom),
            container,
            config,
            on_click: None,
            phase: SelectorPhase::Loading,
        }
    }

    /// Handler attached to every option. Without one, clicks only change
    /// which option is checked.
    pub fn with_on_click(mut self, handler: ClickHandler<D::Node>) -> Self {
        self.on_click = Some(handler);
        self
    }

    pub fn phase(&self) -> &SelectorPhase<D::Node> {
        &self.phase
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.phase, SelectorPhase::Ready(_))
    }

    pub fn options(&self) -> &[RadioOption<D::Node>] {
        match &self.phase {
            SelectorPhase::Ready(options) => options,
            _ => &[],
        }
    }

    /// Fetches the group list and renders it.
    ///
    /// A failed fetch moves the selector to `Failed` without touching the
    /// container, so the caller can offer a retry.
    pub async fn load<S: NodeSource>(
        &mut self,
        source: &S,
    ) -> Result<&[RadioOption<D::Node>], SelectorError> {
        self.phase = SelectorPhase::Loading;
        match source.fetch_nodes().await {
            Ok(response) => Ok(self.render(response.data)?),
            Err(err) => {
                tracing::warn!(error = %err, endpoint = %self.config.endpoint, "group list unavailable");
                self.phase = SelectorPhase::Failed(err.clone());
                Err(err.into())
            }
        }
    }

    /// Renders "All" (checked) followed by every group, in order, unchecked.
    /// Duplicate names get duplicate options.
    pub fn render(
        &mut self,
        groups: Option<Vec<Group>>,
    ) -> Result<&[RadioOption<D::Node>], DomError> {
        let groups = groups.unwrap_or_default();
        let mut options = Vec::with_capacity(groups.len() + 1);

        options.push(self.add_option(self.config.all_label.clone(), true)?);
        for group in groups {
            tracing::debug!(group = %group, "adding group option");
            options.push(self.add_option(group, false)?);
        }

        tracing::info!(options = options.len(), "group selector ready");
        self.phase = SelectorPhase::Ready(options);
        Ok(self.options())
    }

    /// The option currently checked in the document, if any. The first
    /// option is "All" whatever its label says.
    pub fn selection(&self) -> Option<Selection> {
        let dom = self.factory.dom();
        self.options()
            .iter()
            .enumerate()
            .find(|(_, option)| dom.is_checked(&option.element))
            .map(|(index, option)| match index {
                0 => Selection::All,
                _ => Selection::Group(option.value.clone()),
            })
    }

    fn add_option(&self, value: String, checked: bool) -> Result<RadioOption<D::Node>, DomError> {
        let mut config = RadioConfig::new(
            self.container.clone(),
            self.config.radio_name.clone(),
            value,
        )
        .id(self.config.radio_id.clone())
        .checked(checked);
        if let Some(handler) = &self.on_click {
            config = config.on_click(handler.clone());
        }
        self.factory.add(config)
    }
}

/// Page entry point: builds the selector over `container` and loads it
/// from `source`.
pub async fn initialize<'d, S, D>(
    source: &S,
    dom: &'d D,
    container: D::Node,
    config: SelectorConfig,
) -> Result<GroupSelector<'d, D>, SelectorError>
where
    S: NodeSource,
    D: Dom,
{
    let mut selector = GroupSelector::new(dom, container, config);
    selector.load(source).await?;
    Ok(selector)
}
