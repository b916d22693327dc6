use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::content::{blocks_of, SectionPayload};
use crate::models::{
    ContentBlock, SectionStyles, SectionType, SiteThemeUpdate,
};
use crate::ordering::{self, Direction, Ordered, OrderingError};

/// The editor's local mirror of one site. Mutations apply here first, then
/// the matching server call is issued; a failed call is logged and the
/// local state stays as-is (no rollback), so the UI keeps the last
/// optimistic view until a later response overwrites it.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteView {
    pub site_id: Uuid,
    pub site_name: String,
    pub theme_family: String,
    pub pages: Vec<PageView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub position: i32,
    pub is_home: bool,
    pub show_in_menu: bool,
    pub sections: Vec<SectionView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub id: Uuid,
    pub kind: SectionType,
    pub position: i32,
    pub payload: SectionPayload,
}

impl Ordered for PageView {
    fn id(&self) -> Uuid {
        self.id
    }
    fn position(&self) -> i32 {
        self.position
    }
}

impl Ordered for SectionView {
    fn id(&self) -> Uuid {
        self.id
    }
    fn position(&self) -> i32 {
        self.position
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    RenamePage {
        page_id: Uuid,
        title: String,
    },
    MovePage {
        page_id: Uuid,
        direction: Direction,
    },
    DragPage {
        page_id: Uuid,
        target_id: Uuid,
    },
    MoveSection {
        page_id: Uuid,
        section_id: Uuid,
        direction: Direction,
    },
    /// Wholesale block-list replacement; this is the edit that makes a
    /// read-time migration permanent on the server.
    ReplaceBlocks {
        page_id: Uuid,
        section_id: Uuid,
        blocks: Vec<ContentBlock>,
    },
    /// Same swap algorithm as pages and sections, scoped to the block list.
    /// Runs against the migrated block view, so it also migrates a legacy
    /// payload on save.
    MoveBlock {
        page_id: Uuid,
        section_id: Uuid,
        block_id: Uuid,
        direction: Direction,
    },
    UpdateSectionStyles {
        page_id: Uuid,
        section_id: Uuid,
        styles: Option<SectionStyles>,
    },
    UpdateTheme {
        update: SiteThemeUpdate,
    },
}

/// The server call that mirrors an applied action. The transport issues it
/// asynchronously and reports back through [`EditorStore::complete`].
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "call", rename_all = "kebab-case")]
pub enum PersistCall {
    UpdatePage {
        page_id: Uuid,
        title: String,
    },
    ReorderPages {
        changes: Vec<ordering::OrderChange>,
    },
    ReorderSections {
        page_id: Uuid,
        changes: Vec<ordering::OrderChange>,
    },
    SaveSectionPayload {
        section_id: Uuid,
        data_json: String,
    },
    UpdateTheme {
        update: SiteThemeUpdate,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct PersistRequest {
    pub id: Uuid,
    #[serde(flatten)]
    pub call: PersistCall,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("Page {0} not found")]
    UnknownPage(Uuid),

    #[error("Section {0} not found")]
    UnknownSection(Uuid),

    #[error(transparent)]
    Ordering(#[from] OrderingError),
}

pub struct EditorStore {
    state: SiteView,
    in_flight: HashMap<Uuid, PersistCall>,
}

impl EditorStore {
    pub fn new(state: SiteView) -> Self {
        Self {
            state,
            in_flight: HashMap::new(),
        }
    }

    pub fn state(&self) -> &SiteView {
        &self.state
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Apply the action to local state and hand back the server call to
    /// issue. Invalid actions (out-of-bounds move, unknown ids) change
    /// nothing and produce no call.
    pub fn dispatch(
        &mut self,
        action: EditorAction,
    ) -> Result<PersistRequest, EditorError> {
        let call = self.apply(action)?;
        let request_id = Uuid::new_v4();
        self.in_flight.insert(request_id, call.clone());

        Ok(PersistRequest {
            id: request_id,
            call,
        })
    }

    /// Record the outcome of a persistence call. Failures are logged and
    /// the optimistic state is left standing; a superseded update is simply
    /// overwritten by the next successful response.
    pub fn complete(&mut self, request_id: Uuid, result: Result<(), String>) {
        let call = self.in_flight.remove(&request_id);

        if let Err(reason) = result {
            log::warn!(
                "persist call {:?} failed ({}); keeping optimistic state",
                call,
                reason
            );
        }
    }

    fn apply(&mut self, action: EditorAction) -> Result<PersistCall, EditorError> {
        match action {
            EditorAction::RenamePage { page_id, title } => {
                let page = self.page_mut(page_id)?;
                page.title = title.clone();
                Ok(PersistCall::UpdatePage { page_id, title })
            }

            EditorAction::MovePage { page_id, direction } => {
                let changes = ordering::shift(&self.state.pages, page_id, direction)?;
                self.apply_page_orders(&changes);
                Ok(PersistCall::ReorderPages {
                    changes: changes.to_vec(),
                })
            }

            EditorAction::DragPage { page_id, target_id } => {
                let changes = ordering::drag(&self.state.pages, page_id, target_id)?;
                self.apply_page_orders(&changes);
                Ok(PersistCall::ReorderPages { changes })
            }

            EditorAction::MoveSection {
                page_id,
                section_id,
                direction,
            } => {
                let page = self.page_mut(page_id)?;
                let changes = ordering::shift(&page.sections, section_id, direction)?;
                for change in &changes {
                    if let Some(section) =
                        page.sections.iter_mut().find(|s| s.id == change.id)
                    {
                        section.position = change.position;
                    }
                }
                Ok(PersistCall::ReorderSections {
                    page_id,
                    changes: changes.to_vec(),
                })
            }

            EditorAction::ReplaceBlocks {
                page_id,
                section_id,
                blocks,
            } => {
                let section = self.section_mut(page_id, section_id)?;
                let payload =
                    std::mem::take(&mut section.payload).with_blocks(blocks);
                section.payload = SectionPayload::Migrated(payload);
                Ok(PersistCall::SaveSectionPayload {
                    section_id,
                    data_json: section.payload.to_json(),
                })
            }

            EditorAction::MoveBlock {
                page_id,
                section_id,
                block_id,
                direction,
            } => {
                let section = self.section_mut(page_id, section_id)?;

                let mut blocks = blocks_of(&section.payload);
                let changes = ordering::shift(&blocks, block_id, direction)?;
                for change in &changes {
                    if let Some(block) =
                        blocks.iter_mut().find(|b| b.id == change.id)
                    {
                        block.order = change.position;
                    }
                }
                blocks.sort_by_key(|b| b.order);

                let payload =
                    std::mem::take(&mut section.payload).with_blocks(blocks);
                section.payload = SectionPayload::Migrated(payload);
                Ok(PersistCall::SaveSectionPayload {
                    section_id,
                    data_json: section.payload.to_json(),
                })
            }

            EditorAction::UpdateSectionStyles {
                page_id,
                section_id,
                styles,
            } => {
                let section = self.section_mut(page_id, section_id)?;
                section.payload =
                    std::mem::take(&mut section.payload).with_section_styles(styles);
                Ok(PersistCall::SaveSectionPayload {
                    section_id,
                    data_json: section.payload.to_json(),
                })
            }

            EditorAction::UpdateTheme { update } => {
                Ok(PersistCall::UpdateTheme { update })
            }
        }
    }

    fn apply_page_orders(&mut self, changes: &[ordering::OrderChange]) {
        for change in changes {
            if let Some(page) = self.state.pages.iter_mut().find(|p| p.id == change.id)
            {
                page.position = change.position;
            }
        }
    }

    fn page_mut(&mut self, page_id: Uuid) -> Result<&mut PageView, EditorError> {
        self.state
            .pages
            .iter_mut()
            .find(|p| p.id == page_id)
            .ok_or(EditorError::UnknownPage(page_id))
    }

    fn section_mut(
        &mut self,
        page_id: Uuid,
        section_id: Uuid,
    ) -> Result<&mut SectionView, EditorError> {
        self.page_mut(page_id)?
            .sections
            .iter_mut()
            .find(|s| s.id == section_id)
            .ok_or(EditorError::UnknownSection(section_id))
    }
}
