//! Start menu model: level list with locks plus an exit entry.

/// What confirming a menu entry does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Level(usize),
    Exit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub choice: MenuChoice,
    pub locked: bool,
}

/// Vertical menu whose cursor never rests on a locked entry.
#[derive(Clone, Debug)]
pub struct StartMenu {
    items: Vec<MenuItem>,
    selected: usize,
}

impl StartMenu {
    /// Builds the menu from level names in catalog order; levels above `max_level` are locked.
    pub fn new<I, S>(level_names: I, max_level: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut items: Vec<MenuItem> = level_names
            .into_iter()
            .enumerate()
            .map(|(index, name)| MenuItem {
                label: name.into(),
                choice: MenuChoice::Level(index),
                locked: index > max_level,
            })
            .collect();
        items.push(MenuItem {
            label: "Exit".to_string(),
            choice: MenuChoice::Exit,
            locked: false,
        });
        Self { items, selected: 0 }
    }

    /// Re-evaluates locks after progression changed.
    pub fn unlock_through(&mut self, max_level: usize) {
        for item in &mut self.items {
            if let MenuChoice::Level(index) = item.choice {
                item.locked = index > max_level;
            }
        }
        if self.items[self.selected].locked {
            self.selected = 0;
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        if let Some(next) = (self.selected + 1..self.items.len()).find(|&i| !self.items[i].locked) {
            self.selected = next;
        }
    }

    pub fn select_previous(&mut self) {
        if let Some(previous) = (0..self.selected).rev().find(|&i| !self.items[i].locked) {
            self.selected = previous;
        }
    }

    /// Choice under the cursor, or `None` if it is locked.
    pub fn confirm(&self) -> Option<MenuChoice> {
        let item = self.items.get(self.selected)?;
        (!item.locked).then_some(item.choice)
    }
}
