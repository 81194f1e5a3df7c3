use std::fmt;

/// Which id space an entity lives in. Items and clients never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Item,
    Client,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Item => write!(f, "Item"),
            EntityKind::Client => write!(f, "Client"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Book,
    Magazine,
}

impl ItemKind {
    /// Maps the menu sub-choice (`1` Book, `2` Magazine) to a kind.
    pub fn from_choice(choice: i32) -> Option<Self> {
        match choice {
            1 => Some(ItemKind::Book),
            2 => Some(ItemKind::Magazine),
            _ => None,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Book => write!(f, "Book"),
            ItemKind::Magazine => write!(f, "Magazine"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub pages: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Magazine {
    pub id: i32,
    pub title: String,
    pub pages: i32,
}

/// A record held by the library. The variant is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Book(Book),
    Magazine(Magazine),
}

impl Item {
    pub fn new(kind: ItemKind, id: i32, title: String, pages: i32) -> Self {
        match kind {
            ItemKind::Book => Item::Book(Book { id, title, pages }),
            ItemKind::Magazine => Item::Magazine(Magazine { id, title, pages }),
        }
    }

    pub fn id(&self) -> i32 {
        match self {
            Item::Book(b) => b.id,
            Item::Magazine(m) => m.id,
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Book(_) => ItemKind::Book,
            Item::Magazine(_) => ItemKind::Magazine,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Item::Book(b) => &b.title,
            Item::Magazine(m) => &m.title,
        }
    }

    pub fn pages(&self) -> i32 {
        match self {
            Item::Book(b) => b.pages,
            Item::Magazine(m) => m.pages,
        }
    }

    pub fn set_title(&mut self, title: String) {
        match self {
            Item::Book(b) => b.title = title,
            Item::Magazine(m) => m.title = title,
        }
    }

    pub fn set_pages(&mut self, pages: i32) {
        match self {
            Item::Book(b) => b.pages = pages,
            Item::Magazine(m) => m.pages = pages,
        }
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Book(b) => write!(
                f,
                "======> Book Data <======\nBook ID: {}\nBook Name: {}\nNumber of Pages: {}",
                b.id, b.title, b.pages
            ),
            Item::Magazine(m) => write!(
                f,
                "======> Magazine Data <======\nMagazine ID: {}\nMagazine Title: {}\nNumber of Pages: {}",
                m.id, m.title, m.pages
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl Client {
    pub fn new(id: i32, name: String, email: String) -> Self {
        Self { id, name, email }
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "======> Client Data <======\nClient: {}\nID: {}\nEmail: {}",
            self.name, self.id, self.email
        )
    }
}
