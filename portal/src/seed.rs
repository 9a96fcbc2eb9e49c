//! Session seed data
//!
//! The records a fresh portal session starts with. Ids inside each list
//! start at 1; new records continue from the highest seeded id.

use chrono::NaiveDate;
use shared::models::{
    Achievement, AchievementTrigger, Document, DocumentCategory, Employee, EmployeeStatus,
    ItemCategory, MarketplaceItem, Project, ProjectStatus, Purchase, PurchaseStatus, Stock,
    TierLevel, Tone,
};
use shared::types::{Points, RecordId};

use crate::rewards::Peer;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn employee(id: RecordId, name: &str, email: &str, department: &str, position: &str) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        email: email.to_string(),
        phone: format!("+1 234-567-890{}", id),
        department: department.to_string(),
        position: position.to_string(),
        status: EmployeeStatus::Active,
        join_date: NaiveDate::MIN,
        location: String::new(),
        benefits: String::new(),
        amount: String::new(),
        attachment: None,
    }
}

pub fn employees() -> Vec<Employee> {
    vec![
        Employee {
            status: EmployeeStatus::Active,
            join_date: date(2022, 1, 15),
            location: "New York, NY".to_string(),
            benefits: "Health Insurance, 401k".to_string(),
            amount: "$5,000".to_string(),
            attachment: Some("benefits_sarah.pdf".to_string()),
            ..employee(1, "Sarah Johnson", "sarah.j@company.com", "Engineering", "Senior Developer")
        },
        Employee {
            status: EmployeeStatus::Active,
            join_date: date(2021, 6, 20),
            location: "San Francisco, CA".to_string(),
            benefits: "Health Insurance, Stock Options".to_string(),
            amount: "$7,500".to_string(),
            attachment: Some("benefits_michael.pdf".to_string()),
            ..employee(2, "Michael Chen", "michael.c@company.com", "Marketing", "Marketing Manager")
        },
        Employee {
            status: EmployeeStatus::Active,
            join_date: date(2023, 3, 10),
            location: "Austin, TX".to_string(),
            benefits: "Health Insurance, Dental".to_string(),
            amount: "$4,200".to_string(),
            attachment: None,
            ..employee(3, "Emily Rodriguez", "emily.r@company.com", "HR", "HR Specialist")
        },
        Employee {
            status: EmployeeStatus::Active,
            join_date: date(2022, 8, 5),
            location: "Chicago, IL".to_string(),
            benefits: "Health Insurance, 401k, Dental".to_string(),
            amount: "$6,000".to_string(),
            attachment: Some("benefits_david.pdf".to_string()),
            ..employee(4, "David Kim", "david.k@company.com", "Finance", "Financial Analyst")
        },
        Employee {
            status: EmployeeStatus::Inactive,
            join_date: date(2020, 11, 12),
            location: "Seattle, WA".to_string(),
            benefits: "Health Insurance".to_string(),
            amount: "$3,500".to_string(),
            attachment: None,
            ..employee(5, "Lisa Anderson", "lisa.a@company.com", "Engineering", "UX Designer")
        },
    ]
}

fn project(id: RecordId, name: &str, members: &[&str], created_by: &str) -> Project {
    Project {
        id,
        name: name.to_string(),
        members: names(members),
        milestone: String::new(),
        duration: String::new(),
        status: ProjectStatus::Pending,
        created_date: NaiveDate::MIN,
        created_by: created_by.to_string(),
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            milestone: "Phase 1 - Design".to_string(),
            duration: "3 months".to_string(),
            status: ProjectStatus::Approved,
            created_date: date(2024, 1, 15),
            ..project(
                1,
                "Employee Portal Redesign",
                &["Sarah Johnson", "Michael Chen", "Emily Rodriguez"],
                "John Doe",
            )
        },
        Project {
            milestone: "Data Collection".to_string(),
            duration: "2 months".to_string(),
            status: ProjectStatus::InProgress,
            created_date: date(2024, 1, 20),
            ..project(2, "HR Analytics Dashboard", &["David Kim", "Lisa Anderson"], "Sarah Johnson")
        },
        Project {
            milestone: "Requirements Gathering".to_string(),
            duration: "4 months".to_string(),
            status: ProjectStatus::Pending,
            created_date: date(2024, 2, 1),
            ..project(
                3,
                "Onboarding Process Automation",
                &["Emily Rodriguez", "James Wilson"],
                "Michael Chen",
            )
        },
        Project {
            milestone: "Development".to_string(),
            duration: "6 months".to_string(),
            status: ProjectStatus::Rejected,
            created_date: date(2024, 1, 28),
            ..project(
                4,
                "Performance Review System",
                &["Sarah Johnson", "David Kim", "Maria Garcia"],
                "John Doe",
            )
        },
        Project {
            milestone: "Testing Phase".to_string(),
            duration: "5 months".to_string(),
            status: ProjectStatus::Pending,
            created_date: date(2024, 2, 3),
            ..project(
                5,
                "Training Management Platform",
                &["Michael Chen", "Lisa Anderson", "Emily Rodriguez"],
                "David Kim",
            )
        },
    ]
}

/// Names offered when picking project members
pub fn team_members() -> Vec<String> {
    names(&[
        "Sarah Johnson",
        "Michael Chen",
        "Emily Rodriguez",
        "David Kim",
        "Lisa Anderson",
        "James Wilson",
        "Maria Garcia",
        "John Doe",
    ])
}

fn document(
    id: RecordId,
    name: &str,
    category: DocumentCategory,
    uploaded_by: &str,
    upload_date: NaiveDate,
    size: &str,
    points_earned: Points,
) -> Document {
    Document {
        id,
        name: name.to_string(),
        category,
        uploaded_by: uploaded_by.to_string(),
        upload_date,
        size: size.to_string(),
        points_earned,
    }
}

pub fn documents() -> Vec<Document> {
    use DocumentCategory::*;
    vec![
        document(
            1,
            "Employee Handbook 2024.pdf",
            Policy,
            "John Doe",
            date(2024, 2, 1),
            "2.4 MB",
            15,
        ),
        document(
            2,
            "Q1 Performance Reviews.xlsx",
            Performance,
            "Sarah Johnson",
            date(2024, 2, 3),
            "1.8 MB",
            20,
        ),
        document(
            3,
            "Training Certificate - Safety.pdf",
            Training,
            "Michael Chen",
            date(2024, 2, 2),
            "890 KB",
            25,
        ),
        document(
            4,
            "Benefits Package 2024.pdf",
            Benefits,
            "Emily Rodriguez",
            date(2024, 1, 28),
            "1.2 MB",
            18,
        ),
        document(
            5,
            "Compliance Report Q4.docx",
            Compliance,
            "David Kim",
            date(2024, 1, 30),
            "756 KB",
            22,
        ),
    ]
}

fn achievement(
    id: RecordId,
    title: &str,
    description: &str,
    points: Points,
    (progress, target): (u32, u32),
    trigger: Option<AchievementTrigger>,
) -> Achievement {
    Achievement {
        id,
        title: title.to_string(),
        description: description.to_string(),
        points,
        progress,
        target,
        is_completed: progress >= target,
        trigger,
    }
}

/// Only "Document Master" advances on uploads; the others are display-only.
pub fn achievements() -> Vec<Achievement> {
    vec![
        achievement(1, "First Upload", "Upload your first document", 10, (1, 1), None),
        achievement(
            2,
            "Document Master",
            "Upload 10 documents",
            50,
            (5, 10),
            Some(AchievementTrigger::DocumentUploaded),
        ),
        achievement(
            3,
            "Organized Pro",
            "Upload documents in 5 different categories",
            75,
            (5, 5),
            None,
        ),
        achievement(
            4,
            "Weekly Warrior",
            "Upload at least one document every week for a month",
            100,
            (2, 4),
            None,
        ),
    ]
}

fn item(
    id: RecordId,
    name: &str,
    description: &str,
    category: ItemCategory,
    points_cost: Points,
    stock: Stock,
    tone: Tone,
) -> MarketplaceItem {
    MarketplaceItem {
        id,
        name: name.to_string(),
        description: description.to_string(),
        category,
        points_cost,
        stock,
        tier: None,
        tone,
    }
}

pub fn catalog() -> Vec<MarketplaceItem> {
    use ItemCategory::*;
    use Stock::*;
    vec![
        item(
            1,
            "Coffee Voucher",
            "$10 gift card for coffee shop",
            Food,
            50,
            Limited(25),
            Tone::Amber,
        ),
        item(
            2,
            "Extra Day Off",
            "One additional paid day off",
            TimeOff,
            500,
            Limited(5),
            Tone::Blue,
        ),
        item(
            3,
            "Tech Gadget",
            "Wireless earbuds or similar",
            Electronics,
            300,
            Limited(10),
            Tone::Purple,
        ),
        item(
            4,
            "Event Tickets",
            "Concert or sports event tickets",
            Entertainment,
            400,
            Limited(8),
            Tone::Green,
        ),
        item(
            5,
            "Gift Card $25",
            "Amazon or similar retailer",
            GiftCards,
            100,
            Unlimited,
            Tone::Red,
        ),
        item(
            6,
            "Gift Card $50",
            "Amazon or similar retailer",
            GiftCards,
            200,
            Unlimited,
            Tone::Indigo,
        ),
        MarketplaceItem {
            tier: Some(TierLevel::Gold),
            ..item(
                7,
                "Shopping Spree",
                "$200 shopping voucher",
                Shopping,
                750,
                Limited(3),
                Tone::Pink,
            )
        },
        item(
            8,
            "Premium Parking",
            "1 month premium parking spot",
            Perks,
            150,
            Limited(6),
            Tone::Yellow,
        ),
        MarketplaceItem {
            tier: Some(TierLevel::Platinum),
            ..item(
                9,
                "Lunch with CEO",
                "Exclusive lunch meeting",
                Experience,
                1000,
                Limited(2),
                Tone::Purple,
            )
        },
    ]
}

pub fn purchases() -> Vec<Purchase> {
    vec![
        Purchase {
            id: 1,
            item_name: "Coffee Voucher".to_string(),
            points_cost: 50,
            date: date(2024, 1, 28),
            status: PurchaseStatus::Redeemed,
        },
        Purchase {
            id: 2,
            item_name: "Gift Card $25".to_string(),
            points_cost: 100,
            date: date(2024, 1, 15),
            status: PurchaseStatus::Redeemed,
        },
    ]
}

pub fn peers() -> Vec<Peer> {
    vec![
        Peer::new("Sarah Johnson", 1245),
        Peer::new("Michael Chen", 987),
        Peer::new("Emily Rodriguez", 856),
        Peer::new("David Kim", 423),
        Peer::new("Lisa Anderson", 398),
        Peer::new("James Wilson", 267),
        Peer::new("Maria Garcia", 189),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shapes() {
        assert_eq!(employees().len(), 5);
        assert_eq!(projects().len(), 5);
        assert_eq!(catalog().len(), 9);
        assert_eq!(purchases().iter().map(|p| p.points_cost).sum::<Points>(), 150);
        assert_eq!(
            documents().iter().map(|d| d.points_earned).collect::<Vec<_>>(),
            [15, 20, 25, 18, 22]
        );
    }

    #[test]
    fn test_seeded_achievement_flags() {
        let seeded = achievements();
        let done: Vec<_> = seeded.iter().filter(|a| a.is_completed).map(|a| a.id).collect();
        assert_eq!(done, [1, 3]);
        let driven: Vec<_> = seeded
            .iter()
            .filter(|a| a.trigger.is_some())
            .map(|a| a.title.as_str())
            .collect();
        assert_eq!(driven, ["Document Master"]);
    }

    #[test]
    fn test_project_seed_members_are_on_roster() {
        let roster = team_members();
        for project in projects() {
            assert!(project.members.iter().all(|m| roster.contains(m)), "{}", project.name);
            assert!(roster.contains(&project.created_by));
            assert!(!project.milestone.is_empty() && !project.duration.is_empty());
        }
        assert!(employees().iter().all(|e| roster.contains(&e.name)));
    }

    #[test]
    fn test_seed_dates_are_real() {
        assert!(projects().iter().all(|p| p.created_date != NaiveDate::MIN));
        assert!(employees().iter().all(|e| e.join_date != NaiveDate::MIN));
        assert_eq!(employees()[3].join_date, NaiveDate::from_ymd_opt(2022, 8, 5).unwrap());
    }
}
