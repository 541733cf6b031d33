use crate::dto::category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto};

#[derive(Debug, Clone)]
pub struct Category {
    pub id: i64,
    pub member_id: i64,
    pub name: String,
    pub color: String,
}

impl Category {
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            member_id: entity.member_id,
            name: entity.category_name,
            color: entity.category_color,
        }
    }

    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            category_id: self.id,
            category_name: self.name,
            category_color: self.color,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCategoryParams {
    pub member_id: i64,
    pub name: String,
    pub color: String,
}

impl CreateCategoryParams {
    pub fn from_dto(member_id: i64, dto: CreateCategoryDto) -> Self {
        Self {
            member_id,
            name: dto.category_name,
            color: dto.category_color,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCategoryParams {
    pub id: i64,
    pub member_id: i64,
    pub name: String,
    pub color: String,
}

impl UpdateCategoryParams {
    pub fn from_dto(category_id: i64, member_id: i64, dto: UpdateCategoryDto) -> Self {
        Self {
            id: category_id,
            member_id,
            name: dto.category_name,
            color: dto.category_color,
        }
    }
}
