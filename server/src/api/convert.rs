//! Wire translation
//!
//! Maps between persisted entities (`db::models`) and wire models
//! (`shared::models`). Two translators with distinct contracts:
//!
//! - [`write`] is the symmetric path used by create/edit/delete: it consumes
//!   client payloads (a DTO id never wins over the path id) and renders the
//!   affected entity back out.
//! - [`read`] serves get and list, and enriches with nested relationships
//!   where the entity carries them.

/// Write-path translation (create, edit, delete).
pub mod write {
    use crate::db::models::{Employee, MenuData, RestaurantData};
    use shared::models::{EmployeeDto, RestaurantUpsert};

    /// Client payload → entity. The DTO id is not trusted: create assigns a
    /// fresh one and edit/delete take theirs from the request path.
    pub fn employee_to_entity(dto: EmployeeDto) -> Employee {
        Employee {
            id: dto.id.unwrap_or(0),
            name: dto.name,
        }
    }

    /// Affected entity → DTO for write responses.
    pub fn employee_to_dto(entity: Employee) -> EmployeeDto {
        EmployeeDto {
            id: Some(entity.id),
            name: entity.name,
        }
    }

    /// Restaurant write payload → persistence attribute set.
    pub fn restaurant_to_data(dto: RestaurantUpsert) -> RestaurantData {
        RestaurantData {
            name: dto.name,
            location: dto.location,
            capacity: dto.capacity,
            menu: dto.menu.map(|m| MenuData {
                language: m.language,
            }),
            employee_ids: dto.employee_ids,
        }
    }
}

/// Read-path translation (get, list).
pub mod read {
    use crate::db::models::{Employee, Menu, Restaurant};
    use shared::models::{EmployeeDto, MenuDto, RestaurantDto};

    pub fn employee_to_dto(entity: &Employee) -> EmployeeDto {
        EmployeeDto {
            id: Some(entity.id),
            name: entity.name.clone(),
        }
    }

    pub fn employee_list_to_dtos(entities: &[Employee]) -> Vec<EmployeeDto> {
        entities.iter().map(employee_to_dto).collect()
    }

    pub fn menu_to_dto(entity: &Menu) -> MenuDto {
        MenuDto {
            id: Some(entity.id),
            language: entity.language.clone(),
        }
    }

    /// Restaurant → DTO, enriched with its menu and full employee list.
    pub fn restaurant_to_dto(entity: &Restaurant) -> RestaurantDto {
        RestaurantDto {
            id: entity.id,
            name: entity.name.clone(),
            location: entity.location.clone(),
            capacity: entity.capacity,
            menu: entity.menu.as_ref().map(menu_to_dto),
            employees: employee_list_to_dtos(&entity.employees),
        }
    }

    pub fn restaurant_list_to_dtos(entities: &[Restaurant]) -> Vec<RestaurantDto> {
        entities.iter().map(restaurant_to_dto).collect()
    }
}
