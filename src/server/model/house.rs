use crate::model::house::HouseDto;

#[derive(Debug, Clone, PartialEq)]
pub struct House {
    pub name: String,
    pub founder: String,
    pub colors: [String; 2],
}

impl House {
    pub fn from_entity(entity: entity::house::Model) -> Self {
        Self {
            name: entity.name,
            founder: entity.founder,
            colors: [entity.color1, entity.color2],
        }
    }

    pub fn into_dto(self) -> HouseDto {
        HouseDto {
            name: self.name,
            founder: self.founder,
            colors: self.colors.into(),
        }
    }
}
